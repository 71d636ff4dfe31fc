//! Inventory Data Grid
//!
//! Sortable, client-side-paged table with per-row delete and, for record
//! kinds that allow it, inline cell editing. Edits commit a PUT with all
//! non-id fields of the row; the matching row is replaced with the server's
//! response, and a failed commit reverts the cell to its prior value.

use std::cmp::Ordering;
use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api;
use crate::config;
use crate::state::global::GlobalState;
use crate::state::records::{remove_record, replace_record, FieldSpec, Record};

/// Resolves an optional hyperlink for a cell, keyed by field and row.
pub type CellLink<R> = Rc<dyn Fn(&FieldSpec, &R) -> Option<String>>;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Sort {
    key: &'static str,
    ascending: bool,
}

/// Generic grid over one inventory collection.
#[component]
pub fn DataGrid<R>(
    rows: RwSignal<Vec<R>>,
    cell_link: Option<CellLink<R>>,
) -> impl IntoView
where
    R: Record,
{
    let (sort, set_sort) = create_signal(None::<Sort>);
    let (page, set_page) = create_signal(0usize);
    let (page_size, set_page_size) = create_signal(config::DEFAULT_PAGE_SIZE);

    let total = move || rows.with(|r| r.len());
    let pages = move || page_count(total(), page_size.get());
    // Clamp so the page stays valid after deletions shrink the collection.
    let current_page = move || page.get().min(pages() - 1);

    let visible = create_memo(move |_| {
        let mut items = rows.get();
        if let Some(s) = sort.get() {
            sort_rows(&mut items, s.key, s.ascending);
        }
        page_slice(&items, current_page(), page_size.get()).to_vec()
    });

    // Header click cycles ascending -> descending -> unsorted.
    let toggle_sort = move |key: &'static str| {
        set_sort.update(|current| {
            *current = match *current {
                Some(s) if s.key == key && s.ascending => Some(Sort { key, ascending: false }),
                Some(s) if s.key == key => None,
                _ => Some(Sort { key, ascending: true }),
            };
        });
    };

    let column_count = R::FIELDS.len() + 2;

    view! {
        <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
            <table class="w-full text-left text-sm">
                <thead>
                    <tr class="border-b border-gray-700 text-gray-400">
                        <th
                            class="px-4 py-3 cursor-pointer select-none"
                            on:click=move |_| toggle_sort("id")
                        >
                            {move || format!("ID{}", sort_marker(sort.get(), "id"))}
                        </th>
                        {R::FIELDS.iter().map(|field| {
                            let key = field.key;
                            let label = field.label;
                            view! {
                                <th
                                    class="px-4 py-3 cursor-pointer select-none"
                                    on:click=move |_| toggle_sort(key)
                                >
                                    {move || format!("{}{}", label, sort_marker(sort.get(), key))}
                                </th>
                            }
                        }).collect_view()}
                        <th class="px-4 py-3">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let items = visible.get();
                        if items.is_empty() {
                            view! {
                                <tr>
                                    <td
                                        colspan=column_count.to_string()
                                        class="px-4 py-8 text-center text-gray-400"
                                    >
                                        "No items yet."
                                    </td>
                                </tr>
                            }.into_view()
                        } else {
                            items.into_iter().map(|row| {
                                let link = cell_link.clone();
                                view! { <GridRow row=row rows=rows cell_link=link /> }
                            }).collect_view()
                        }
                    }}
                </tbody>
            </table>

            // Paging footer
            <div class="flex items-center justify-between px-4 py-3 border-t border-gray-700 text-sm text-gray-400">
                <div class="flex items-center space-x-2">
                    <span>"Rows per page:"</span>
                    <select
                        on:change=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                                set_page_size.set(size);
                                set_page.set(0);
                            }
                        }
                        class="bg-gray-700 rounded px-2 py-1 focus:outline-none"
                    >
                        {config::PAGE_SIZE_OPTIONS.iter().map(|size| {
                            let size = *size;
                            view! {
                                <option
                                    value=size.to_string()
                                    selected=move || page_size.get() == size
                                >
                                    {size.to_string()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <span>
                    {move || format!("Page {} of {} ({} items)", current_page() + 1, pages(), total())}
                </span>

                <div class="space-x-2">
                    <button
                        on:click=move |_| set_page.update(|p| *p = p.saturating_sub(1))
                        disabled=move || current_page() == 0
                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 disabled:opacity-50 rounded transition-colors"
                    >
                        "Prev"
                    </button>
                    <button
                        on:click=move |_| set_page.set((current_page() + 1).min(pages() - 1))
                        disabled=move || current_page() + 1 >= pages()
                        class="px-3 py-1 bg-gray-700 hover:bg-gray-600 disabled:opacity-50 rounded transition-colors"
                    >
                        "Next"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// One grid row: id, data cells, delete button.
#[component]
fn GridRow<R>(
    row: R,
    rows: RwSignal<Vec<R>>,
    cell_link: Option<CellLink<R>>,
) -> impl IntoView
where
    R: Record,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let id = row.id();

    let on_delete = move |_| {
        let state = state.clone();
        spawn_local(async move {
            match api::delete::<R>(id).await {
                Ok(()) => {
                    let _ = rows.try_update(|items| remove_record(items, id));
                    state.show_success(&format!("{} has been deleted!", R::LABEL));
                }
                Err(e) => {
                    log::error!("Error deleting {} {}: {}", R::LABEL, id, e);
                    state.show_error(&format!("Failed to delete {}!", R::LABEL));
                }
            }
        });
    };

    view! {
        <tr class="border-b border-gray-700 hover:bg-gray-700/50 transition-colors">
            <td class="px-4 py-2 text-gray-400">{id}</td>
            {R::FIELDS.iter().map(|field| {
                let link = cell_link.as_ref().and_then(|resolve| resolve(field, &row));
                view! { <GridCell row=row.clone() field=field link=link rows=rows /> }
            }).collect_view()}
            <td class="px-4 py-2">
                <button
                    on:click=on_delete
                    class="px-2 py-1 bg-red-600 hover:bg-red-700 rounded text-white text-xs font-medium"
                >
                    "X"
                </button>
            </td>
        </tr>
    }
}

/// One data cell. Double-click to edit when the kind allows inline edits;
/// Enter or blur commits, Escape reverts without a request.
#[component]
fn GridCell<R>(
    row: R,
    field: &'static FieldSpec,
    rows: RwSignal<Vec<R>>,
    link: Option<String>,
) -> impl IntoView
where
    R: Record,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let original = row.field(field.key).to_string();

    let (editing, set_editing) = create_signal(false);
    let (draft, set_draft) = create_signal(original.clone());
    let cancelled = store_value(false);

    // The input mounts after the dblclick re-render, so focus it from an
    // effect once the node ref fills rather than relying on `autofocus`.
    let input_ref: NodeRef<html::Input> = create_node_ref();
    create_effect(move |_| {
        if editing.get() {
            if let Some(input) = input_ref.get() {
                let _ = input.focus();
            }
        }
    });

    let start_edit = {
        let original = original.clone();
        move |_| {
            if R::INLINE_EDIT {
                set_draft.set(original.clone());
                set_editing.set(true);
            }
        }
    };

    // Both keys route through blur so the commit runs exactly once.
    let on_key = move |ev: web_sys::KeyboardEvent| {
        let key = ev.key();
        if key == "Enter" || key == "Escape" {
            if key == "Escape" {
                cancelled.set_value(true);
            }
            if let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                let _ = input.blur();
            }
        }
    };

    let commit_row = row;
    let commit_original = original.clone();
    let commit = move |_: web_sys::FocusEvent| {
        set_editing.set(false);

        if cancelled.get_value() {
            cancelled.set_value(false);
            set_draft.set(commit_original.clone());
            return;
        }

        let value = draft.get_untracked();
        if value == commit_original {
            return;
        }

        let updated = commit_row.with_field(field.key, value);
        let state = state.clone();
        let revert_to = commit_original.clone();
        spawn_local(async move {
            match api::update::<R>(updated.id(), &updated.payload()).await {
                Ok(fresh) => {
                    let _ = rows.try_update(|items| replace_record(items, fresh));
                    state.show_success("Changes saved!");
                }
                Err(e) => {
                    log::error!("Error updating {} {}: {}", R::LABEL, updated.id(), e);
                    state.show_error("Failed to save changes!");
                    let _ = set_draft.try_set(revert_to);
                }
            }
        });
    };

    view! {
        <td class="px-4 py-2" on:dblclick=start_edit>
            {move || {
                if editing.get() {
                    let commit = commit.clone();
                    view! {
                        <input
                            type="text"
                            prop:value=move || draft.get()
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                            on:keydown=on_key
                            on:blur=commit
                            node_ref=input_ref
                            class="w-full bg-gray-700 rounded px-2 py-1
                                   border border-primary-500 focus:outline-none"
                        />
                    }.into_view()
                } else {
                    match link.clone() {
                        Some(url) => view! {
                            <a
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                class="text-primary-400 hover:underline"
                            >
                                {original.clone()}
                            </a>
                        }.into_view(),
                        None => view! { <span>{original.clone()}</span> }.into_view(),
                    }
                }
            }}
        </td>
    }
}

fn sort_marker(sort: Option<Sort>, key: &str) -> &'static str {
    match sort {
        Some(s) if s.key == key && s.ascending => " ▲",
        Some(s) if s.key == key => " ▼",
        _ => "",
    }
}

/// Numeric-aware comparison: numbers compare as numbers, everything else
/// case-insensitively as text.
fn compare_values(a: &str, b: &str) -> Ordering {
    match (a.parse::<f64>(), b.parse::<f64>()) {
        (Ok(x), Ok(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

fn sort_rows<R: Record>(rows: &mut [R], key: &str, ascending: bool) {
    rows.sort_by(|a, b| {
        let ord = if key == "id" {
            a.id().cmp(&b.id())
        } else {
            compare_values(a.field(key), b.field(key))
        };
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
}

/// Number of pages; an empty collection still renders one (empty) page.
fn page_count(len: usize, size: usize) -> usize {
    let size = size.max(1);
    if len == 0 {
        1
    } else {
        len.div_ceil(size)
    }
}

fn page_slice<R>(rows: &[R], page: usize, size: usize) -> &[R] {
    let start = (page * size).min(rows.len());
    let end = (start + size).min(rows.len());
    &rows[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::records::Glassware;

    fn item(id: i64, name: &str, amount: &str) -> Glassware {
        Glassware {
            id,
            name: name.to_string(),
            amount: amount.to_string(),
        }
    }

    #[test]
    fn compare_values_is_numeric_aware() {
        assert_eq!(compare_values("9", "10"), Ordering::Less);
        assert_eq!(compare_values("beaker", "Flask"), Ordering::Less);
        assert_eq!(compare_values("10", "flask"), Ordering::Less);
    }

    #[test]
    fn sort_rows_toggles_direction() {
        let mut rows = vec![item(1, "Flask", "2"), item(2, "Beaker", "10")];
        sort_rows(&mut rows, "name", true);
        assert_eq!(rows[0].name, "Beaker");
        sort_rows(&mut rows, "name", false);
        assert_eq!(rows[0].name, "Flask");
    }

    #[test]
    fn sort_rows_by_id_is_numeric() {
        let mut rows = vec![item(10, "a", "1"), item(2, "b", "1"), item(9, "c", "1")];
        sort_rows(&mut rows, "id", true);
        let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 9, 10]);
    }

    #[test]
    fn page_count_covers_edges() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }

    #[test]
    fn page_slice_clamps_out_of_range() {
        let rows: Vec<Glassware> = (0..25).map(|i| item(i, "x", "1")).collect();
        assert_eq!(page_slice(&rows, 0, 10).len(), 10);
        assert_eq!(page_slice(&rows, 2, 10).len(), 5);
        assert!(page_slice(&rows, 9, 10).is_empty());
    }
}
