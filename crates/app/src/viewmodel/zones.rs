//! Zone list bindings

use std::rc::Rc;
use std::sync::Arc;

use pinecamp_core::Zone;
use slint::{ComponentHandle, ModelRc, VecModel};

use crate::state::{AppState, Screen};
use crate::viewmodel::booking;
use crate::{MainWindow, ZoneItem};

pub fn setup_zone_bindings(window: &MainWindow, state: Arc<AppState>) {
    let state_open = state.clone();
    let window_weak = window.as_weak();
    window.on_open_zone(move |zone_id| {
        let zone_id = zone_id.to_string();
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        if let Err(e) = state_open.open_zone(&zone_id) {
            tracing::warn!("Could not open zone {zone_id}: {e}");
            window.set_notice(format!("Zone not found: {zone_id}").into());
            return;
        }
        state_open.set_screen(Screen::ZoneDetail);

        if let Some(flow) = state_open.flow.lock().unwrap().as_ref() {
            window.set_current_zone(zone_item(flow.zone()));
        }
        window.set_date_from_text("".into());
        window.set_date_to_text("".into());
        window.set_map_view(true);
        window.set_notice("".into());
        booking::refresh_selection(&window, &state_open);
        window.set_active_screen(Screen::ZoneDetail.tag().into());
    });

    // Leaving for the zone list abandons the flow entirely
    let state_back = state.clone();
    let window_weak = window.as_weak();
    window.on_go_zones(move || {
        state_back.abandon_flow();
        state_back.set_screen(Screen::ZoneList);
        if let Some(window) = window_weak.upgrade() {
            window.set_submitting(false);
            window.set_booking_done(false);
            window.set_notice("".into());
            window.set_active_screen(Screen::ZoneList.tag().into());
        }
    });

    refresh_zones(window, &state);
}

pub fn refresh_zones(window: &MainWindow, state: &AppState) {
    let items: Vec<ZoneItem> = state.catalog.zones().iter().map(zone_item).collect();
    window.set_zones(ModelRc::from(Rc::new(VecModel::from(items))));
}

fn zone_item(zone: &Zone) -> ZoneItem {
    ZoneItem {
        id: zone.id.clone().into(),
        name: zone.name.clone().into(),
        description: zone.description.clone().into(),
        capacity: zone.capacity as i32,
        price_per_night: zone.price_per_night as i32,
        amenities: zone.amenity_line().into(),
    }
}
