//! HTML fragments for the search panes.
//!
//! Fragments are plain strings the desktop UI injects via
//! `dangerous_inner_html`, so every piece of externally supplied text —
//! question, keywords, the echoed query, error messages — is passed through
//! [`escape_html`] before insertion. The class names match the knowledge-base
//! admin stylesheet (`result-item`, `keyword`, `status-badge`, ...).

use crate::escape::escape_html;
use crate::types::FaqHit;

/// Fallback title for hits with no question text.
const UNTITLED: &str = "Без названия";

/// Initial placeholder shown before the user has typed anything, and again
/// whenever the input is cleared.
pub fn prompt_fragment() -> String {
    r#"<div class="no-results">
  <div class="no-results-icon"></div>
  <p>Начните вводить запрос для поиска</p>
</div>"#
        .to_string()
}

/// Spinner shown from the first keystroke until the debounced search lands.
pub fn loading_fragment() -> String {
    r#"<div class="loading"><span class="spinner"></span> Поиск...</div>"#.to_string()
}

/// Inline error panel replacing the results pane.
pub fn error_fragment(message: &str) -> String {
    format!(
        r#"<div class="no-results error">
  <div class="no-results-icon warning"></div>
  <p>Ошибка при выполнении поиска</p>
  <small>{message}</small>
</div>"#,
        message = escape_html(message)
    )
}

/// Render a result set in the order the service returned it. An empty set
/// becomes the no-results placeholder echoing the (escaped) query.
pub fn results_fragment(hits: &[FaqHit], query: &str) -> String {
    if hits.is_empty() {
        return format!(
            r#"<div class="no-results">
  <div class="no-results-icon"></div>
  <p>По запросу "{query}" ничего не найдено</p>
</div>"#,
            query = escape_html(query)
        );
    }

    hits.iter()
        .enumerate()
        .map(|(index, hit)| result_item(index, hit))
        .collect()
}

/// One result block: question, optional keyword chips, status badge. The
/// animation delay staggers the reveal by position in the list.
fn result_item(index: usize, hit: &FaqHit) -> String {
    let question = hit
        .question
        .as_deref()
        .filter(|q| !q.is_empty())
        .unwrap_or(UNTITLED);

    let keywords = match &hit.keywords {
        Some(list) if !list.is_empty() => {
            let chips: String = list
                .iter()
                .map(|k| format!(r#"<span class="keyword">{}</span>"#, escape_html(k)))
                .collect();
            format!("\n  <div class=\"keywords-container\">{chips}</div>")
        }
        _ => String::new(),
    };

    let (badge_class, badge_label) = match hit.active {
        Some(true) => ("status-active", "Активный"),
        _ => ("status-inactive", "Неактивный"),
    };

    format!(
        r#"<div class="result-item fade-in" style="animation-delay: {delay:.1}s">
  <div class="result-question">{question}</div>{keywords}
  <div class="status-badge {badge_class}">{badge_label}</div>
</div>"#,
        delay = index as f64 * 0.1,
        question = escape_html(question),
    )
}

/// Stats line under a pane. Zero hits read "0 результатов"; the empty string
/// (pane reset, error shown) is the caller's concern.
pub fn stats_line(count: usize) -> String {
    if count == 0 {
        "0 результатов".to_string()
    } else {
        format!("{count} результат(ов)")
    }
}
