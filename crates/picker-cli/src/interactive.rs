//! Interactive repository prompt
//!
//! Uses dialoguer for terminal-based selection. Section headers are shown as
//! dimmed rows; choosing one simply re-opens the prompt on the next entry.

use colored::Colorize;
use dialoguer::Select;
use dialoguer::theme::ColorfulTheme;
use picker_core::{PickItem, SelectionPresenter};

/// Rows visible at once before the prompt scrolls
const PAGE_SIZE: usize = 20;

/// [`SelectionPresenter`] drawing a dialoguer select prompt on the terminal
pub struct TerminalPresenter {
    theme: ColorfulTheme,
}

impl TerminalPresenter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionPresenter for TerminalPresenter {
    fn select(&self, title: &str, items: &[PickItem]) -> picker_core::Result<Option<String>> {
        let Some(mut cursor) = next_selectable(items, 0) else {
            return Ok(None);
        };
        let rows: Vec<String> = items.iter().map(render_row).collect();

        loop {
            let picked = Select::with_theme(&self.theme)
                .with_prompt(format!("{title} (Esc to cancel)"))
                .items(&rows)
                .default(cursor)
                .max_length(PAGE_SIZE)
                .interact_opt()
                .map_err(|e| picker_core::Error::presenter(e.to_string()))?;

            let Some(index) = picked else {
                return Ok(None);
            };

            match &items[index] {
                PickItem::Entry { repo, .. } => return Ok(Some(repo.clone())),
                PickItem::Header { .. } => {
                    cursor = next_selectable(items, index).unwrap_or(cursor);
                }
            }
        }
    }
}

/// Text shown for one row of the prompt.
fn render_row(item: &PickItem) -> String {
    match item {
        PickItem::Header { label } => format!("── {} ──", label).dimmed().to_string(),
        PickItem::Entry { label, .. } => format!("  {}", label),
    }
}

/// Index of the first selectable item at or after `from`.
fn next_selectable(items: &[PickItem], from: usize) -> Option<usize> {
    items
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, item)| item.is_selectable())
        .map(|(index, _)| index)
}
