//! # tp-format
//!
//! Turns generated tutoring content into display markup.
//!
//! - [`strategy_to_html`]: line-oriented markdown subset (headers, bullet
//!   lists, inline bold) to an HTML fragment
//! - [`lesson_to_html`]: structured lesson JSON to a sectioned HTML fragment
//! - [`content_to_html`]: either of the above for stored content, passing
//!   editor-saved HTML through untouched
//! - [`evaluation::render_report`]: plain-text self-evaluation report
//!
//! Conversion never fails. Missing or malformed parts produce less output,
//! not errors. Input is not HTML-escaped; content comes from the trusted
//! backend.

pub mod evaluation;
mod lesson;
mod stored;
mod strategy;

pub use lesson::lesson_to_html;
pub use stored::content_to_html;
pub use strategy::strategy_to_html;
