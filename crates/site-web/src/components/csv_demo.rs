//! CSV Preview Widget
//!
//! Marketing demo: parse an uploaded menu CSV in the browser, show a
//! bounded preview, then run a simulated analysis pass on a timer.
//! Entirely client-side; nothing leaves the tab.

use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

use crate::i18n::{text, Locale, Text};

/// Rows rendered before the preview truncates
const PREVIEW_ROW_LIMIT: usize = 100;

/// Fixed delay for the simulated analysis pass
const ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

/// Split raw CSV text into rows of trimmed cells.
///
/// Deliberately naive: no quoting or escaping, so cells containing
/// literal commas will split.
pub fn parse_csv(raw: &str) -> Vec<Vec<String>> {
    raw.trim()
        .lines()
        .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect()
}

fn is_csv_filename(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

#[component]
pub fn CsvDemo(locale: RwSignal<Locale>) -> impl IntoView {
    let (drag_active, set_drag_active) = signal(false);
    let (rows, set_rows) = signal(None::<Vec<Vec<String>>>);
    let (error, set_error) = signal(None::<String>);
    let (analyzing, set_analyzing) = signal(false);
    let (complete, set_complete) = signal(false);

    let input_ref = NodeRef::<leptos::html::Input>::new();

    let handle_files = move |files: Option<web_sys::FileList>| {
        let Some(file) = files.and_then(|list| list.get(0)) else {
            return;
        };

        // Filename check only; content is taken on faith.
        if !is_csv_filename(&file.name()) {
            set_error.set(Some(
                text(locale.get_untracked(), Text::DemoInvalidFile).to_string(),
            ));
            return;
        }
        set_error.set(None);

        let Ok(reader) = web_sys::FileReader::new() else {
            return;
        };
        let onload = {
            let reader = reader.clone();
            Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
                let Some(raw) = reader.result().ok().and_then(|v| v.as_string()) else {
                    set_error.set(Some("Failed to parse CSV.".to_string()));
                    return;
                };
                set_rows.set(Some(parse_csv(&raw)));
                set_complete.set(false);
                set_analyzing.set(true);
                // fake processing delay
                set_timeout(
                    move || {
                        set_analyzing.set(false);
                        set_complete.set(true);
                    },
                    ANALYSIS_DELAY,
                );
            })
        };
        reader.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        if reader.read_as_text(&file).is_err() {
            set_error.set(Some("Failed to parse CSV.".to_string()));
        }
    };

    view! {
        <div class="csv-demo">
            <h3 class="demo-title">{move || text(locale.get(), Text::DemoTitle)}</h3>

            <div
                class="dropzone"
                class=("drag-active", move || drag_active.get())
                on:dragover=move |ev| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragleave=move |_| set_drag_active.set(false)
                on:drop=move |ev| {
                    ev.prevent_default();
                    set_drag_active.set(false);
                    handle_files(ev.data_transfer().and_then(|dt| dt.files()));
                }
            >
                <p class="drop-hint">{move || text(locale.get(), Text::DemoDropHint)}</p>
                <p class="browse-hint">{move || text(locale.get(), Text::DemoBrowseHint)}</p>
                <button
                    class="btn btn-primary"
                    on:click=move |_| {
                        if let Some(input) = input_ref.get() {
                            input.click();
                        }
                    }
                >
                    {move || text(locale.get(), Text::DemoBrowseButton)}
                </button>
                <input
                    type="file"
                    accept=".csv"
                    class="hidden"
                    node_ref=input_ref
                    on:change=move |ev| {
                        let files = ev
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::HtmlInputElement>().ok())
                            .and_then(|input| input.files());
                        handle_files(files);
                    }
                />
            </div>

            <Show when=move || error.get().is_some()>
                <div class="demo-error">{move || error.get().unwrap_or_default()}</div>
            </Show>

            {move || rows.get().map(|all| {
                let total = all.len();
                view! {
                    <div class="preview">
                        <h4>{format!("Preview ({total} rows)")}</h4>
                        <table class="preview-table">
                            <tbody>
                                {all.iter()
                                    .take(PREVIEW_ROW_LIMIT)
                                    .map(|cols| view! {
                                        <tr>
                                            {cols.iter()
                                                .map(|cell| view! { <td>{cell.clone()}</td> })
                                                .collect_view()}
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                        {(total > PREVIEW_ROW_LIMIT).then(|| view! {
                            <p class="truncation">
                                {format!("Showing first {PREVIEW_ROW_LIMIT} rows of {total}")}
                            </p>
                        })}
                    </div>
                }
            })}

            <Show when=move || analyzing.get()>
                <p class="analyzing">{move || text(locale.get(), Text::DemoAnalyzing)}</p>
            </Show>

            <Show when=move || complete.get()>
                <p class="complete">{move || text(locale.get(), Text::DemoComplete)}</p>
                <div class="result-panel">
                    <p class="result-title">{move || text(locale.get(), Text::DemoReadyTitle)}</p>
                    <p>{move || text(locale.get(), Text::DemoReadyBody)}</p>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_rows_and_cells() {
        let rows = parse_csv("a,b\nc,d");
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b".into()],
                vec!["c".into(), "d".into()],
            ]
        );
    }

    #[test]
    fn trims_cells_and_handles_crlf() {
        let rows = parse_csv("Burger , 540\r\nFries,  320  \r\n");
        assert_eq!(
            rows,
            vec![
                vec!["Burger".to_string(), "540".into()],
                vec!["Fries".into(), "320".into()],
            ]
        );
    }

    #[test]
    fn quoted_commas_still_split() {
        // No quoting support: a quoted field with a comma misparses.
        let rows = parse_csv("\"Soup, of the day\",120");
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn large_files_parse_in_full() {
        let raw = (0..150)
            .map(|i| format!("item {i},{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let rows = parse_csv(&raw);
        assert_eq!(rows.len(), 150);
        // The preview truncates at render time, not parse time.
        assert!(rows.len() > PREVIEW_ROW_LIMIT);
    }

    #[test]
    fn filename_check_is_case_insensitive() {
        assert!(is_csv_filename("menu.csv"));
        assert!(is_csv_filename("MENU.CSV"));
        assert!(!is_csv_filename("menu.txt"));
        assert!(!is_csv_filename("csv"));
    }
}
