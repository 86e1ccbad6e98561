//! Zone detail bindings: spot picking, stay dates and the live summary

use std::rc::Rc;
use std::sync::Arc;

use chrono::NaiveDate;
use pinecamp_core::{
    invariants, DateRange, Error, Spot, SpotBoard, SpotSize, SpotStatus, SpotVisual, SummaryView,
    ViewMode,
};
use slint::{ComponentHandle, ModelRc, VecModel};

use crate::state::{AppState, Screen};
use crate::{MainWindow, SpotItem, SummaryData};

pub fn setup_booking_bindings(window: &MainWindow, state: Arc<AppState>) {
    // Map markers and list rows share this handler
    let state_select = state.clone();
    let window_weak = window.as_weak();
    window.on_select_spot(move |spot_id| {
        let selected = {
            let mut board_guard = state_select.board.lock().unwrap();
            let Some(board) = board_guard.as_mut() else {
                return;
            };
            // Occupied and maintenance spots swallow the click
            if !board.select(spot_id.as_str()) {
                return;
            }
            board.selected_spot().cloned()
        };

        if let Some(spot) = selected {
            if let Some(flow) = state_select.flow.lock().unwrap().as_mut() {
                match flow.select_spot(&spot) {
                    Ok(()) => invariants::assert_flow_invariants(flow),
                    Err(e) => tracing::warn!("Spot selection rejected: {e}"),
                }
            }
        }

        if let Some(window) = window_weak.upgrade() {
            refresh_selection(&window, &state_select);
        }
    });

    let state_hover = state.clone();
    let window_weak = window.as_weak();
    window.on_hover_spot(move |spot_id| {
        if let Some(board) = state_hover.board.lock().unwrap().as_mut() {
            board.hover(Some(spot_id.as_str()));
        }
        if let Some(window) = window_weak.upgrade() {
            refresh_selection(&window, &state_hover);
        }
    });

    let state_unhover = state.clone();
    let window_weak = window.as_weak();
    window.on_clear_hover(move || {
        if let Some(board) = state_unhover.board.lock().unwrap().as_mut() {
            board.hover(None);
        }
        if let Some(window) = window_weak.upgrade() {
            refresh_selection(&window, &state_unhover);
        }
    });

    // Switching presentation must not lose the selection
    let state_view = state.clone();
    let window_weak = window.as_weak();
    window.on_set_map_view(move |map_view| {
        if let Some(board) = state_view.board.lock().unwrap().as_mut() {
            board.set_view(if map_view { ViewMode::Map } else { ViewMode::List });
        }
        if let Some(window) = window_weak.upgrade() {
            window.set_map_view(map_view);
            refresh_selection(&window, &state_view);
        }
    });

    // Either endpoint edited; half-typed dates simply read as unset
    let state_dates = state.clone();
    let window_weak = window.as_weak();
    window.on_dates_edited(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let range = DateRange::new(
            parse_date(&window.get_date_from_text()),
            parse_date(&window.get_date_to_text()),
        );
        if let Some(flow) = state_dates.flow.lock().unwrap().as_mut() {
            if let Err(e) = flow.set_range(range) {
                tracing::warn!("Date change rejected: {e}");
            }
        }
        refresh_selection(&window, &state_dates);
    });

    // Confirm hands a structured draft to the booking form
    let state_confirm = state.clone();
    let window_weak = window.as_weak();
    window.on_confirm_selection(move || {
        let Some(window) = window_weak.upgrade() else {
            return;
        };
        let draft = {
            let flow_guard = state_confirm.flow.lock().unwrap();
            let Some(flow) = flow_guard.as_ref() else {
                return;
            };
            flow.confirm()
        };
        match draft {
            Ok(draft) => {
                *state_confirm.draft.lock().unwrap() = Some(draft);
                state_confirm.set_screen(Screen::BookingForm);
                window.set_submitting(false);
                window.set_booking_done(false);
                window.set_notice("".into());
                window.set_active_screen(Screen::BookingForm.tag().into());
            }
            Err(Error::MissingSelection(missing)) => {
                window.set_notice(format!("Please choose {missing}").into());
            }
            Err(e) => {
                window.set_notice(e.to_string().into());
            }
        }
    });

    // Back from the form; the selection stays intact
    let state_back = state;
    let window_weak = window.as_weak();
    window.on_go_detail(move || {
        state_back.set_screen(Screen::ZoneDetail);
        if let Some(window) = window_weak.upgrade() {
            window.set_active_screen(Screen::ZoneDetail.tag().into());
        }
    });
}

/// Push the board and summary into the window
pub fn refresh_selection(window: &MainWindow, state: &AppState) {
    let board_guard = state.board.lock().unwrap();
    let flow_guard = state.flow.lock().unwrap();
    let (Some(board), Some(flow)) = (board_guard.as_ref(), flow_guard.as_ref()) else {
        return;
    };

    let spots: Vec<SpotItem> = board.spots().iter().map(|s| spot_item(s, board)).collect();
    let list_spots: Vec<SpotItem> = board.available().map(|s| spot_item(s, board)).collect();

    let view = SummaryView::project(flow.zone(), board.selected_spot(), &flow.range());
    window.set_summary(summary_data(&view));
    window.set_spots(ModelRc::from(Rc::new(VecModel::from(spots))));
    window.set_list_spots(ModelRc::from(Rc::new(VecModel::from(list_spots))));
}

fn spot_item(spot: &Spot, board: &SpotBoard) -> SpotItem {
    let visual = board.visual(&spot.id);
    SpotItem {
        id: spot.id.clone().into(),
        name: spot.name.clone().into(),
        size_label: spot.size.label().into(),
        status_label: spot.status.label().into(),
        x: spot.location.x,
        y: spot.location.y,
        diameter: match spot.size {
            SpotSize::Small => 56.0,
            SpotSize::Medium => 64.0,
            SpotSize::Large => 80.0,
        },
        selectable: spot.is_available(),
        selected: visual == SpotVisual::Selected,
        hovered: visual == SpotVisual::Hovered,
        maintenance: spot.status == SpotStatus::Maintenance,
    }
}

fn summary_data(view: &SummaryView) -> SummaryData {
    SummaryData {
        zone_name: view.zone_name.clone().into(),
        zone_description: view.zone_description.clone().into(),
        has_spot: view.spot.is_some(),
        spot_name: view
            .spot
            .as_ref()
            .map(|s| s.name.clone())
            .unwrap_or_default()
            .into(),
        spot_size: view
            .spot
            .as_ref()
            .map(|s| s.size_label.to_string())
            .unwrap_or_default()
            .into(),
        has_dates: view.stay.is_some(),
        date_span: view
            .stay
            .as_ref()
            .map(|s| s.span.clone())
            .unwrap_or_default()
            .into(),
        nights: view.stay.as_ref().map(|s| s.nights as i32).unwrap_or(0),
        price_per_night: view.price_per_night as i32,
        total: view.total as i32,
        complete: view.is_complete(),
        notice: view.notice().unwrap_or_default().into(),
    }
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()
}
