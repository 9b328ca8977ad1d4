use std::fmt::Write;

use crate::core::models::{ImageState, PreviewPane, ScoredResult};

pub fn render_result_line(result: &ScoredResult) -> String {
    let mut line = format!("{:>5.2}  {}", result.score, result.title());
    if let Some(info) = &result.additional_information {
        let _ = write!(line, "\n       {}", info);
    }
    let _ = write!(line, "\n       {}", result.article_url());
    line
}

pub fn render_preview(pane: &PreviewPane, image_state: &ImageState) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "== {} ==", pane.title);

    if let Some(image_box) = &pane.image {
        let source = match image_state {
            ImageState::Loaded(_) => "thumbnail",
            _ => "placeholder",
        };
        let _ = writeln!(
            output,
            "[{} {}x{}, max {}px]",
            source, image_box.width, image_box.height, image_box.max_size
        );
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "{}", pane.text);
    let _ = writeln!(output);

    let labels: Vec<String> = pane
        .buttons
        .iter()
        .map(|button| format!("[ {} ]", button.label))
        .collect();
    let _ = write!(output, "{}", labels.join("  "));

    output
}
