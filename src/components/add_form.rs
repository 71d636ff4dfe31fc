//! Add Form Component
//!
//! One text input per schema field plus a submit button. Native form
//! submission makes Enter in any field equivalent to clicking Add.

use leptos::*;

use crate::api;
use crate::state::global::GlobalState;
use crate::state::records::Record;

/// Generic add form for one inventory collection.
///
/// Validation is client-side only: every field must be non-empty or the
/// submission is blocked with a toast and no request is issued. On success
/// the server's record is appended to `rows` and the form clears; on failure
/// the form contents are left intact.
#[component]
pub fn AddForm<R>(rows: RwSignal<Vec<R>>) -> impl IntoView
where
    R: Record,
{
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let values: Vec<RwSignal<String>> = R::FIELDS
        .iter()
        .map(|_| create_rw_signal(String::new()))
        .collect();
    let (submitting, set_submitting) = create_signal(false);

    let form_values = values.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let entries: Vec<(&'static str, String)> = R::FIELDS
            .iter()
            .zip(&form_values)
            .map(|(field, value)| (field.key, value.get()))
            .collect();

        if has_empty_field(&entries) {
            state.show_error("Please fill in all fields");
            return;
        }

        set_submitting.set(true);

        let payload = form_payload(&entries);
        let state = state.clone();
        let form_values = form_values.clone();
        spawn_local(async move {
            match api::create::<R>(&payload).await {
                Ok(record) => {
                    let _ = rows.try_update(|items| items.push(record));
                    for value in &form_values {
                        let _ = value.try_set(String::new());
                    }
                    state.show_success(&format!("{} has been added!", R::LABEL));
                }
                Err(e) => {
                    log::error!("Error adding {}: {}", R::LABEL, e);
                    state.show_error(&format!("Failed to add {}!", R::LABEL));
                }
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            {R::FIELDS.iter().zip(values.iter().copied()).map(|(field, value)| view! {
                <div>
                    <label class="block text-sm text-gray-400 mb-2">{field.label}</label>
                    <input
                        type="text"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        class="w-full bg-gray-700 rounded-lg px-4 py-2
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    />
                </div>
            }).collect_view()}

            <button
                type="submit"
                disabled=move || submitting.get()
                class="w-full px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() {
                    "Adding...".to_string()
                } else {
                    format!("Add {}", R::LABEL)
                }}
            </button>
        </form>
    }
}

/// True when any declared form field is empty.
fn has_empty_field(entries: &[(&str, String)]) -> bool {
    entries.iter().any(|(_, value)| value.is_empty())
}

/// POST body mapping each field key to its entered value.
fn form_payload(entries: &[(&str, String)]) -> serde_json::Value {
    let mut map = serde_json::Map::new();
    for (key, value) in entries {
        map.insert(key.to_string(), serde_json::json!(value));
    }
    serde_json::Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&'static str, &str)]) -> Vec<(&'static str, String)> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn empty_field_blocks_submission() {
        assert!(has_empty_field(&entries(&[("name", "Beaker"), ("amount", "")])));
        assert!(!has_empty_field(&entries(&[("name", "Beaker"), ("amount", "12")])));
    }

    #[test]
    fn payload_maps_keys_to_values() {
        let payload = form_payload(&entries(&[("name", "Water"), ("formula", "H2O")]));
        assert_eq!(payload["name"], "Water");
        assert_eq!(payload["formula"], "H2O");
        assert_eq!(payload.as_object().unwrap().len(), 2);
    }
}
