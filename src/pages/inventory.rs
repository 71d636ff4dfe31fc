//! Generic Inventory Page
//!
//! One page component serves all three collections: add form on the left,
//! data grid on the right, collection fetched on mount. The per-resource
//! pages are thin instantiations of this.

use std::cell::Cell;
use std::rc::Rc;

use leptos::*;

use crate::api;
use crate::components::{AddForm, CellLink, DataGrid};
use crate::state::records::Record;

/// List view for one inventory collection.
#[component]
pub fn InventoryPage<R>(cell_link: Option<CellLink<R>>) -> impl IntoView
where
    R: Record,
{
    let rows = create_rw_signal(Vec::<R>::new());

    // Drop a load response that lands after the page unmounts.
    let alive = Rc::new(Cell::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.set(false));
    }

    // Fetch the collection on mount. Failure only logs: the page stays
    // usable with an empty grid, and every later mutation reports normally.
    create_effect(move |_| {
        let alive = alive.clone();
        spawn_local(async move {
            match api::fetch_all::<R>().await {
                Ok(items) => {
                    if alive.get() {
                        let _ = rows.try_set(items);
                    }
                }
                Err(e) => {
                    log::error!("Error fetching {}: {}", R::COLLECTION, e);
                }
            }
        });
    });

    view! {
        <div class="space-y-6">
            <h1 class="text-3xl font-bold">{R::TITLE}</h1>

            <div class="flex flex-col lg:flex-row gap-6">
                <div class="lg:w-1/4 bg-gray-800 rounded-xl border border-gray-700 p-4 h-fit">
                    <h2 class="text-lg font-semibold mb-4">{format!("Add {}", R::LABEL)}</h2>
                    <AddForm rows=rows />
                </div>

                <div class="flex-1">
                    <DataGrid rows=rows cell_link=cell_link />
                </div>
            </div>
        </div>
    }
}
