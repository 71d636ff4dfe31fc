//! Glassware Page

use leptos::*;

use crate::pages::inventory::InventoryPage;
use crate::state::records::Glassware as GlasswareRecord;

/// Glassware list page component
#[component]
pub fn Glassware() -> impl IntoView {
    view! { <InventoryPage<GlasswareRecord> cell_link=None /> }
}
