//! Application state management
//!
//! Everything here is session-local: nothing survives a restart, and
//! navigation payloads travel as structured state in this module, never
//! as encoded strings.

use std::sync::Mutex;

use pinecamp_core::{
    BookingDraft, BookingFlow, Catalog, Error, Reservation, Result, SlipFile, SpotBoard,
};

use crate::submission::TaskHandle;

/// Which screen the window is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    ZoneList,
    ZoneDetail,
    BookingForm,
    Payment,
    Bookings,
}

impl Screen {
    /// Tag the Slint side switches on
    pub fn tag(self) -> &'static str {
        match self {
            Screen::ZoneList => "zones",
            Screen::ZoneDetail => "detail",
            Screen::BookingForm => "form",
            Screen::Payment => "payment",
            Screen::Bookings => "bookings",
        }
    }
}

/// Payment context handed from the booking form (or the bookings list)
/// to the payment screen
#[derive(Debug, Clone)]
pub struct PaymentContext {
    pub reference: String,
    pub spot_name: String,
    pub amount: u64,
    pub slip: Option<SlipFile>,
}

/// Main application state
pub struct AppState {
    pub catalog: Catalog,
    pub screen: Mutex<Screen>,
    /// Booking attempt for the currently open zone
    pub flow: Mutex<Option<BookingFlow>>,
    /// Selection board for the currently open zone
    pub board: Mutex<Option<SpotBoard>>,
    /// Draft produced by a confirmed selection
    pub draft: Mutex<Option<BookingDraft>>,
    pub payment: Mutex<Option<PaymentContext>>,
    /// Reservations made in this session
    pub reservations: Mutex<Vec<Reservation>>,
    /// In-flight submission or verification task
    pub task: Mutex<Option<TaskHandle>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Ok(Self {
            catalog: Catalog::built_in()?,
            screen: Mutex::new(Screen::ZoneList),
            flow: Mutex::new(None),
            board: Mutex::new(None),
            draft: Mutex::new(None),
            payment: Mutex::new(None),
            reservations: Mutex::new(Vec::new()),
            task: Mutex::new(None),
        })
    }

    pub fn set_screen(&self, screen: Screen) {
        *self.screen.lock().unwrap() = screen;
    }

    pub fn screen(&self) -> Screen {
        *self.screen.lock().unwrap()
    }

    /// Start a fresh booking flow for a zone
    pub fn open_zone(&self, zone_id: &str) -> Result<()> {
        let zone = self.catalog.zone(zone_id)?.clone();
        let spots = self.catalog.spots_for_zone(zone_id);

        *self.flow.lock().unwrap() = Some(BookingFlow::new(zone));
        *self.board.lock().unwrap() = Some(SpotBoard::new(spots));
        *self.draft.lock().unwrap() = None;
        Ok(())
    }

    /// Leave the flow entirely. The next visit starts from scratch.
    pub fn abandon_flow(&self) {
        if let Some(task) = self.task.lock().unwrap().as_mut() {
            task.cancel();
        }
        *self.task.lock().unwrap() = None;
        *self.flow.lock().unwrap() = None;
        *self.board.lock().unwrap() = None;
        *self.draft.lock().unwrap() = None;
    }

    pub fn add_reservation(&self, reservation: Reservation) {
        self.reservations.lock().unwrap().push(reservation);
    }

    pub fn find_reservation(&self, reference: &str) -> Option<Reservation> {
        self.reservations
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.reference == reference)
            .cloned()
    }

    /// Mark a reservation paid once its slip has been verified
    pub fn confirm_reservation(&self, reference: &str) -> Result<()> {
        let mut reservations = self.reservations.lock().unwrap();
        let reservation = reservations
            .iter_mut()
            .find(|r| r.reference == reference)
            .ok_or_else(|| Error::NotFound(format!("reservation {reference}")))?;
        reservation.confirm()
    }
}
