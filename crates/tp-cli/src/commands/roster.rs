use anyhow::Context;
use tp_core::entities::{Student, Tutor};

use crate::cli::global::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Tabular, opt_cell, output_rows};

pub async fn students(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let students = ctx.client.students().await.context("failed to load students")?;
    output_rows(&students, flags.format)
}

pub async fn tutors(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tutors = ctx.client.tutors().await.context("failed to load tutors")?;
    output_rows(&tutors, flags.format)
}

impl Tabular for Student {
    const HEADERS: &'static [&'static str] = &["id", "name", "grade", "subject", "learning_style"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            opt_cell(self.grade.as_deref()),
            opt_cell(self.subject.as_deref()),
            opt_cell(self.learning_style.as_deref()),
        ]
    }
}

impl Tabular for Tutor {
    const HEADERS: &'static [&'static str] = &["id", "name", "teaching_style", "education_system"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            opt_cell(self.teaching_style.as_deref()),
            opt_cell(self.education_system.as_deref()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn student_cells_fill_missing_fields() {
        let student = Student {
            id: "stu-1".into(),
            name: "Ana".into(),
            grade: Some("5".into()),
            subject: None,
            learning_style: Some("visual".into()),
        };
        assert_eq!(student.cells(), ["stu-1", "Ana", "5", "-", "visual"]);
        assert_eq!(student.cells().len(), Student::HEADERS.len());
    }
}
