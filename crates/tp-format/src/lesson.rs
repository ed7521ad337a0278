//! Structured lesson JSON to HTML.
//!
//! The lesson shape drifts between generator versions, so every field is
//! looked up dynamically. A missing, `null`, empty, `false`, or zero field
//! renders nothing, and a section whose parts all render nothing emits no
//! heading.

use serde_json::Value;

const UNTITLED: &str = "Untitled Lesson";

/// Render a generated lesson as an HTML fragment.
///
/// Always starts with `<h1>{title}</h1>`; sections follow in a fixed order
/// and only when they have content.
#[must_use]
pub fn lesson_to_html(lesson: &Value) -> String {
    let mut out = Html::default();

    let title = scalar(lesson.get("title")).unwrap_or_else(|| UNTITLED.to_string());
    out.wrap("h1", &title);

    out.section("📋 Session Overview", |body| {
        if let Some(overview) = scalar(lesson.get("session_overview")) {
            body.wrap("p", &overview);
        }
    });

    out.section("🎯 Learning Objectives", |body| {
        body.bullets(&items(lesson.get("learning_objectives")));
    });

    out.section("📚 Study Guide for Student", |body| {
        let guide = lesson.get("study_guide");
        let part = |key: &str| guide.and_then(|g| g.get(key));
        body.titled_bullets("Key Questions", part("key_questions"));
        body.titled_bullets("Core Concepts", part("core_concepts"));
        if let Some(aids) = scalar(part("visual_aids")) {
            body.wrap("h3", "Visual Aids");
            body.raw(&format!("<p><em>{aids}</em></p>"));
        }
    });

    out.section("📖 Pre-Class Readings", |body| {
        for (index, reading) in entries(lesson.get("pre_class_readings")).into_iter().enumerate() {
            render_reading(body, index + 1, reading);
        }
    });

    out.section("✍️ Pre-Class Work", |body| {
        let work = lesson.get("pre_class_work");
        let part = |key: &str| work.and_then(|w| w.get(key));
        let assessment = entries(part("pre_assessment"));
        if !assessment.is_empty() {
            body.wrap("h3", "Pre-Assessment");
            body.raw("<ol>");
            for item in assessment {
                body.raw(&format!(
                    "<li><strong>{}</strong> <em>({})</em></li>",
                    field(item, "question"),
                    field(item, "purpose"),
                ));
            }
            body.raw("</ol>");
        }
        body.titled_bullets("Reflection Prompts", part("reflection_prompts"));
        body.titled_bullets("Preparation Tasks", part("preparation_tasks"));
    });

    out.section("🎓 Class Activities", |body| {
        for (index, activity) in entries(lesson.get("class_activities")).into_iter().enumerate() {
            render_activity(body, index + 1, activity);
        }
    });

    out.section("📝 Homework", |body| {
        let homework = lesson.get("homework");
        let part = |key: &str| homework.and_then(|h| h.get(key));
        body.titled_bullets("Practice Tasks", part("practice_tasks"));
        if let Some(project) = scalar(part("creative_project")) {
            body.wrap("h3", "Creative Project");
            body.wrap("p", &project);
        }
        let prep = entries(part("next_class_prep"));
        if !prep.is_empty() {
            body.wrap("h3", "Preparation for Next Class");
            body.raw("<ul>");
            for item in prep {
                let url = field(item, "url");
                body.raw(&format!(
                    "<li><strong>{}:</strong> {} <a href=\"{url}\" target=\"_blank\">(link)</a> - {}</li>",
                    field(item, "type"),
                    field(item, "title"),
                    field(item, "time"),
                ));
            }
            body.raw("</ul>");
        }
    });

    out.section("📦 Materials Summary", |body| {
        body.bullets(&items(lesson.get("materials_summary")));
    });

    out.section("🌍 Cultural Adaptations", |body| {
        if let Some(adaptations) = scalar(lesson.get("cultural_adaptations")) {
            body.wrap("p", &adaptations);
        }
    });

    out.finish()
}

fn render_reading(out: &mut Html, number: usize, reading: &Value) {
    let url = field(reading, "url");
    out.wrap("h3", &format!("{number}. {}", field(reading, "title")));
    out.raw(&format!(
        "<p><strong>URL:</strong> <a href=\"{url}\" target=\"_blank\">{url}</a></p>"
    ));
    out.raw(&format!(
        "<p><strong>Estimated Time:</strong> {}</p>",
        field(reading, "estimated_time")
    ));
    out.labelled_bullets("Key Takeaways", reading.get("key_takeaways"));
    out.labelled_bullets("Reading Questions", reading.get("reading_questions"));
}

fn render_activity(out: &mut Html, number: usize, activity: &Value) {
    out.wrap(
        "h3",
        &format!(
            "Activity {number}: {} ({} min)",
            field(activity, "name"),
            field(activity, "duration")
        ),
    );
    out.wrap("p", &field(activity, "description"));
    out.labelled_bullets("Materials", activity.get("materials"));
    if let Some(notes) = scalar(activity.get("teacher_notes")) {
        out.raw(&format!(
            "<p><strong>Teacher Notes:</strong> <em>{notes}</em></p>"
        ));
    }
    if let Some(strategy) = scalar(activity.get("learning_strategy")) {
        out.raw(&format!(
            "<p><strong>Learning Strategy:</strong> {strategy}</p>"
        ));
    }
}

// ---------------------------------------------------------------------------
// Value access
// ---------------------------------------------------------------------------

/// Text of a present scalar. Missing, `null`, empty strings, `false`, and
/// zero are absent; other non-string values render as their JSON text.
fn scalar(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64().is_some_and(|v| v.abs() < f64::EPSILON) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Text of a field inside an entry whose presence the caller already
/// decided. Only missing and `null` render as an empty string.
fn field(entry: &Value, key: &str) -> String {
    match entry.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Object elements of an array field; anything else in the array is skipped.
fn entries(value: Option<&Value>) -> Vec<&Value> {
    value
        .and_then(Value::as_array)
        .map(|list| list.iter().filter(|item| item.is_object()).collect())
        .unwrap_or_default()
}

fn items(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|list| list.iter().filter_map(|item| scalar(Some(item))).collect())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Output buffer
// ---------------------------------------------------------------------------

#[derive(Default)]
struct Html {
    buf: String,
}

impl Html {
    fn raw(&mut self, fragment: &str) {
        self.buf.push_str(fragment);
    }

    fn wrap(&mut self, tag: &str, text: &str) {
        self.buf.push('<');
        self.buf.push_str(tag);
        self.buf.push('>');
        self.buf.push_str(text);
        self.buf.push_str("</");
        self.buf.push_str(tag);
        self.buf.push('>');
    }

    /// `<h2>{heading}</h2>` followed by whatever `build` writes, or nothing
    /// when `build` writes nothing.
    fn section(&mut self, heading: &str, build: impl FnOnce(&mut Self)) {
        let mut body = Self::default();
        build(&mut body);
        if !body.buf.is_empty() {
            self.wrap("h2", heading);
            self.buf.push_str(&body.buf);
        }
    }

    /// `<ul>…</ul>`, or nothing for an empty list.
    fn bullets(&mut self, list: &[String]) {
        if list.is_empty() {
            return;
        }
        self.raw("<ul>");
        for item in list {
            self.wrap("li", item);
        }
        self.raw("</ul>");
    }

    /// `<h3>{title}</h3><ul>…</ul>` when the list is non-empty.
    fn titled_bullets(&mut self, title: &str, list: Option<&Value>) {
        let list = items(list);
        if !list.is_empty() {
            self.wrap("h3", title);
            self.bullets(&list);
        }
    }

    /// `<p><strong>{label}:</strong></p><ul>…</ul>` when the list is non-empty.
    fn labelled_bullets(&mut self, label: &str, list: Option<&Value>) {
        let list = items(list);
        if !list.is_empty() {
            self.raw(&format!("<p><strong>{label}:</strong></p>"));
            self.bullets(&list);
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}
