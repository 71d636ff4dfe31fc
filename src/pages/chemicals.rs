//! Chemicals Page
//!
//! The generic inventory page plus safety-data-sheet link enrichment: the
//! bundled lookup is fetched once on mount, and a name cell with an entry
//! renders as a hyperlink.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use crate::api;
use crate::components::CellLink;
use crate::pages::inventory::InventoryPage;
use crate::state::records::{Chemical, Record, SdsLookup};

/// Chemicals list page component
#[component]
pub fn Chemicals() -> impl IntoView {
    let sds = create_rw_signal(SdsLookup::default());

    let alive = Rc::new(Cell::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.set(false));
    }

    // A missing or malformed lookup document degrades to plain-text names.
    create_effect(move |_| {
        let alive = alive.clone();
        spawn_local(async move {
            match api::fetch_sds_lookup().await {
                Ok(lookup) => {
                    if alive.get() {
                        let _ = sds.try_set(lookup);
                    }
                }
                Err(e) => {
                    log::error!("Error fetching SDS lookup: {}", e);
                }
            }
        });
    });

    let link: CellLink<Chemical> = Rc::new(move |field, row: &Chemical| {
        if field.key != "name" {
            return None;
        }
        sds.with(|lookup| lookup.url_for(row.field("name")).map(str::to_string))
    });

    view! { <InventoryPage<Chemical> cell_link=Some(link) /> }
}
