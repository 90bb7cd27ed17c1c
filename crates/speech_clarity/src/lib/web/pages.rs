//! Page templates. Pure string rendering, no pipeline coupling.

use crate::{AnalysisReport, Error};

pub const EMPTY_URL_WARNING: &str = "Please enter a valid video URL!";

const STYLE: &str = "\
body { background-color: #f4f6fa; font-family: sans-serif; max-width: 720px; margin: 2rem auto; padding: 0 1rem; }\
h1 { text-align: center; }\
form { text-align: center; margin: 1.5rem 0; }\
input[type=url] { width: 70%; padding: 0.5rem; }\
button { padding: 0.5rem 1rem; }\
.warning { background-color: #fff3cd; padding: 1rem; border-radius: 10px; text-align: center; }\
.score-box { background-color: #e8f5e9; padding: 20px; border-radius: 10px; margin-top: 10px; text-align: center; }\
.success { background-color: #d5f5d8; padding: 20px; border-radius: 10px; text-align: center; font-size: 20px; font-weight: bold; color: #1b5e20; }\
.failure { background-color: #fdecea; padding: 20px; border-radius: 10px; color: #b71c1c; }\
details { margin: 1rem 0; }";

/// Landing page: one URL input, one trigger, optional warning banner.
pub fn index(warning: Option<&str>) -> String {
    let warning_html = warning
        .map(|w| format!("<p class=\"warning\">{}</p>", escape_html(w)))
        .unwrap_or_default();

    page(
        "Video Communication Analyzer",
        &format!(
            "<h1>Video to Text &amp; Summary</h1>\
             {warning_html}\
             <form method=\"post\" action=\"/analyze\">\
             <input type=\"url\" name=\"video_url\" placeholder=\"https://youtu.be/example\">\
             <button type=\"submit\">Analyze Video</button>\
             </form>"
        ),
    )
}

/// Results page: collapsible transcript, score as a rounded percentage,
/// summary, and a static success banner.
pub fn report(report: &AnalysisReport) -> String {
    page(
        "Analysis Results",
        &format!(
            "<h1>Analysis Results</h1>\
             <details><summary>Full Transcript</summary><p>{transcript}</p></details>\
             <h2>Clarity Score</h2>\
             <div class=\"score-box\"><h2>{score:.2}%</h2></div>\
             <h2>Summary</h2>\
             <p>{summary}</p>\
             <div class=\"success\">Analysis completed successfully!</div>",
            transcript = escape_html(&report.transcript),
            score = report.clarity_score,
            summary = escape_html(&report.summary),
        ),
    )
}

/// Unhandled-failure page carrying the error text.
pub fn failure(error: &Error) -> String {
    page(
        "Analysis Failed",
        &format!(
            "<h1>Analysis Failed</h1>\
             <div class=\"failure\"><p>{}</p></div>\
             <p><a href=\"/\">Back</a></p>",
            escape_html(&error.to_string())
        ),
    )
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!doctype html>\
         <html lang=\"en\">\
         <head><meta charset=\"utf-8\"><title>{title}</title>\
         <style>{STYLE}</style></head>\
         <body>{body}</body>\
         </html>",
        title = escape_html(title),
    )
}

fn escape_html(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '&' => "&amp;".to_string(),
            '<' => "&lt;".to_string(),
            '>' => "&gt;".to_string(),
            '"' => "&quot;".to_string(),
            '\'' => "&#39;".to_string(),
            _ => c.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            transcript: "A transcript with <tags> & quotes.".to_string(),
            improved_text: "A transcript with quotes.".to_string(),
            clarity_score: 87.61,
            summary: "A transcript with quotes.".to_string(),
        }
    }

    #[test]
    fn test_index_has_input_and_trigger() {
        let html = index(None);
        assert!(html.contains("name=\"video_url\""));
        assert!(html.contains("<button"));
        assert!(!html.contains("class=\"warning\""));
    }

    #[test]
    fn test_index_renders_warning_when_present() {
        let html = index(Some(EMPTY_URL_WARNING));
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("Please enter a valid video URL!"));
    }

    #[test]
    fn test_report_escapes_model_text() {
        let html = report(&sample_report());
        assert!(html.contains("&lt;tags&gt;"), "got: {html}");
        assert!(!html.contains("<tags>"));
        assert!(html.contains("87.61%"));
        assert!(html.contains("completed successfully"));
        assert!(html.contains("<details>"));
    }

    #[test]
    fn test_score_renders_with_two_decimals() {
        let mut r = sample_report();
        r.clarity_score = 90.0;
        assert!(report(&r).contains("90.00%"));
    }

    #[test]
    fn test_failure_page_carries_error_text() {
        let err = Error::AudioFetch(anyhow::anyhow!("yt-dlp exited with 1"));
        let html = failure(&err);
        assert!(html.contains("audio download failed"), "got: {html}");
        assert!(html.contains("yt-dlp exited with 1"));
    }
}
