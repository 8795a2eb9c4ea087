//! Response printing

use colored::*;
use scrapyard_core::dto::Resp;
use serde_json::Value;

/// Longest raw content preview printed per page
const PREVIEW_CHARS: usize = 400;

/// Print a normalized response
pub fn print_resp(resp: &Resp) {
    if let Some(job) = &resp.job {
        println!("{}", "Job:".bold());
        println!("  ID:      {}", job.id.cyan());
        println!("  Status:  {}", job.status.to_string().green());
        if let Some(created) = &job.created_at {
            println!("  Created: {}", created.dimmed());
        }
        println!();
    }

    if resp.results.is_empty() {
        println!("{}", "No results returned.".yellow());
        return;
    }

    println!(
        "{}",
        format!("Received {} result page(s):", resp.results.len()).bold()
    );
    println!();

    for result in &resp.results {
        let page = result
            .page
            .map(|p| p.to_string())
            .unwrap_or_else(|| "?".to_string());
        let status = result
            .status_code
            .map(|s| s.to_string())
            .unwrap_or_else(|| "-".to_string());

        println!("  {} Page {}", "▸".cyan(), page);
        println!("    Status: {}", colorize_status(&status));
        if let Some(url) = &result.url {
            println!("    URL:    {}", url.dimmed());
        }
        if let Some(parser) = &result.parser_type {
            println!("    Parser: {}", parser);
        }

        println!("{}", "─".repeat(80).dimmed());
        match &result.content {
            Value::String(text) => println!("{}", preview(text)),
            other => match serde_json::to_string_pretty(other) {
                Ok(pretty) => println!("{}", pretty),
                Err(_) => println!("{:?}", other),
            },
        }
        println!("{}", "─".repeat(80).dimmed());
        println!();
    }
}

fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{}{}", head, "…".dimmed())
    } else {
        head
    }
}

fn colorize_status(status: &str) -> ColoredString {
    match status.chars().next() {
        Some('2') => status.green(),
        Some('4') | Some('5') => status.red(),
        _ => status.yellow(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_keeps_short_text() {
        assert_eq!(preview("<html></html>"), "<html></html>");
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let long = "a".repeat(PREVIEW_CHARS + 10);
        let out = preview(&long);
        assert!(out.starts_with(&"a".repeat(PREVIEW_CHARS)));
        assert!(out.len() > PREVIEW_CHARS);
        assert!(!out.starts_with(&"a".repeat(PREVIEW_CHARS + 1)));
    }
}
