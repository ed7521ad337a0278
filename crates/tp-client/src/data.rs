//! Record listings: roster and per-student galleries.

use tp_core::entities::{LessonRecord, StrategyRecord, Student, Tutor};

use crate::{ClientError, TutorClient, segment};

#[derive(serde::Deserialize)]
struct StudentsEnvelope {
    #[serde(default)]
    students: Vec<Student>,
}

#[derive(serde::Deserialize)]
struct TutorsEnvelope {
    #[serde(default)]
    tutors: Vec<Tutor>,
}

#[derive(serde::Deserialize)]
struct StrategiesEnvelope {
    #[serde(default)]
    strategies: Vec<StrategyRecord>,
}

#[derive(serde::Deserialize)]
struct LessonsEnvelope {
    #[serde(default)]
    lessons: Vec<LessonRecord>,
}

impl TutorClient {
    /// List all students.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the request fails, the backend returns a
    /// non-success status, or the response cannot be decoded.
    pub async fn students(&self) -> Result<Vec<Student>, ClientError> {
        let data: StudentsEnvelope = self.get_json("/api/v1/data/students").await?;
        Ok(data.students)
    }

    /// List all tutors.
    ///
    /// # Errors
    ///
    /// Same as [`Self::students`].
    pub async fn tutors(&self) -> Result<Vec<Tutor>, ClientError> {
        let data: TutorsEnvelope = self.get_json("/api/v1/data/tutors").await?;
        Ok(data.tutors)
    }

    /// Past strategies for one student, newest first as the backend orders them.
    ///
    /// # Errors
    ///
    /// Same as [`Self::students`].
    pub async fn strategies(&self, student_id: &str) -> Result<Vec<StrategyRecord>, ClientError> {
        let path = format!("/api/v1/data/strategies/{}", segment(student_id));
        let data: StrategiesEnvelope = self.get_json(&path).await?;
        Ok(data.strategies)
    }

    /// Past lessons for one student.
    ///
    /// # Errors
    ///
    /// Same as [`Self::students`].
    pub async fn lessons(&self, student_id: &str) -> Result<Vec<LessonRecord>, ClientError> {
        let path = format!("/api/v1/data/lessons/{}", segment(student_id));
        let data: LessonsEnvelope = self.get_json(&path).await?;
        Ok(data.lessons)
    }
}
