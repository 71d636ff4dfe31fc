//! Equipment Page

use leptos::*;

use crate::pages::inventory::InventoryPage;
use crate::state::records::Equipment as EquipmentRecord;

/// Equipment list page component
#[component]
pub fn Equipment() -> impl IntoView {
    view! { <InventoryPage<EquipmentRecord> cell_link=None /> }
}
