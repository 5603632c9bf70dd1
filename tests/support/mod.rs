#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::rc::Rc;

use async_trait::async_trait;
use class_signup_pwa::config::AppConfig;
use class_signup_pwa::models::{
    Activity, ActivityCatalog, ActivityDetails, CheckAuthResponse, LoginResponse, MessageResponse,
    Notification,
};
use class_signup_pwa::services::SignupApi;
use class_signup_pwa::state::{MemoryTokenStore, TokenStore};
use class_signup_pwa::viewmodels::{
    AuthControls, LoginFormSurface, NotificationSurface, Portal, PortalSurfaces, RosterSurface,
    Scheduler,
};
use class_signup_pwa::ClientError;

pub const TEACHER: &str = "teacher";
pub const PASSWORD: &str = "secret";
pub const ISSUED_TOKEN: &str = "teacher-token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListActivities,
    CheckAuth(String),
    Login(String),
    Logout(String),
    Signup { activity: String, email: String, token: String },
    Unregister { activity: String, email: String, token: String },
}

/// Servidor en memoria con registro de llamadas
pub struct FakeApi {
    activities: RefCell<Vec<(String, ActivityDetails)>>,
    valid_tokens: RefCell<HashSet<String>>,
    calls: RefCell<Vec<Call>>,
    pub fail_list: Cell<bool>,
    pub fail_check_auth: Cell<bool>,
    pub fail_login: Cell<bool>,
    pub fail_logout: Cell<bool>,
    pub reject_logout: Cell<bool>,
    pub fail_mutations: Cell<bool>,
    pub bare_rejections: Cell<bool>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self {
            activities: RefCell::new(vec![
                (
                    "Chess Club".to_string(),
                    details(
                        "Learn strategies and compete",
                        "Fridays, 3:30 PM - 5:00 PM",
                        12,
                        &["michael@mergington.edu"],
                    ),
                ),
                (
                    "Programming Class".to_string(),
                    details(
                        "Learn programming fundamentals",
                        "Tuesdays, 3:30 PM - 4:30 PM",
                        2,
                        &["emma@mergington.edu", "sophia@mergington.edu"],
                    ),
                ),
            ]),
            valid_tokens: RefCell::new(HashSet::new()),
            calls: RefCell::new(Vec::new()),
            fail_list: Cell::new(false),
            fail_check_auth: Cell::new(false),
            fail_login: Cell::new(false),
            fail_logout: Cell::new(false),
            reject_logout: Cell::new(false),
            fail_mutations: Cell::new(false),
            bare_rejections: Cell::new(false),
        }
    }

    pub fn with_valid_token(self, token: &str) -> Self {
        self.valid_tokens.borrow_mut().insert(token.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    pub fn count(&self, matches: impl Fn(&Call) -> bool) -> usize {
        self.calls.borrow().iter().filter(|call| matches(call)).count()
    }

    pub fn participants(&self, activity: &str) -> Vec<String> {
        self.activities
            .borrow()
            .iter()
            .find(|(name, _)| name == activity)
            .map(|(_, details)| details.participants.clone())
            .unwrap_or_default()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn reject(&self, status: u16, detail: &str) -> ClientError {
        let detail = (!self.bare_rejections.get()).then(|| detail.to_string());
        ClientError::Rejected { status, detail }
    }

    fn authorize(&self, token: &str) -> Result<(), ClientError> {
        if self.valid_tokens.borrow().contains(token) {
            Ok(())
        } else {
            Err(self.reject(401, "Authentication required"))
        }
    }
}

fn details(description: &str, schedule: &str, max: i64, participants: &[&str]) -> ActivityDetails {
    ActivityDetails {
        description: description.to_string(),
        schedule: schedule.to_string(),
        max_participants: max,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn network_down() -> ClientError {
    ClientError::Network("Failed to fetch".to_string())
}

#[async_trait(?Send)]
impl SignupApi for FakeApi {
    async fn list_activities(&self) -> Result<ActivityCatalog, ClientError> {
        self.record(Call::ListActivities);
        if self.fail_list.get() {
            return Err(network_down());
        }
        Ok(ActivityCatalog::new(
            self.activities
                .borrow()
                .iter()
                .map(|(name, details)| Activity::new(name.clone(), details.clone()))
                .collect(),
        ))
    }

    async fn check_auth(&self, token: &str) -> Result<CheckAuthResponse, ClientError> {
        self.record(Call::CheckAuth(token.to_string()));
        if self.fail_check_auth.get() {
            return Err(network_down());
        }
        Ok(CheckAuthResponse {
            authenticated: self.valid_tokens.borrow().contains(token),
        })
    }

    async fn login(&self, username: &str, password: &str) -> Result<LoginResponse, ClientError> {
        self.record(Call::Login(username.to_string()));
        if self.fail_login.get() {
            return Err(network_down());
        }
        if username != TEACHER || password != PASSWORD {
            return Err(self.reject(401, "Invalid credentials"));
        }
        self.valid_tokens.borrow_mut().insert(ISSUED_TOKEN.to_string());
        Ok(LoginResponse {
            token: ISSUED_TOKEN.to_string(),
        })
    }

    async fn logout(&self, token: &str) -> Result<(), ClientError> {
        self.record(Call::Logout(token.to_string()));
        if self.fail_logout.get() {
            return Err(network_down());
        }
        if self.reject_logout.get() {
            return Err(self.reject(500, "Session store unavailable"));
        }
        self.valid_tokens.borrow_mut().remove(token);
        Ok(())
    }

    async fn signup(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError> {
        self.record(Call::Signup {
            activity: activity.to_string(),
            email: email.to_string(),
            token: token.to_string(),
        });
        if self.fail_mutations.get() {
            return Err(network_down());
        }
        self.authorize(token)?;
        let mut activities = self.activities.borrow_mut();
        let Some((_, details)) = activities.iter_mut().find(|(name, _)| name == activity) else {
            return Err(self.reject(404, "Activity not found"));
        };
        if details.participants.iter().any(|p| p == email) {
            return Err(self.reject(400, "Student is already signed up"));
        }
        details.participants.push(email.to_string());
        Ok(MessageResponse {
            message: format!("Signed up {} for {}", email, activity),
        })
    }

    async fn unregister(
        &self,
        activity: &str,
        email: &str,
        token: &str,
    ) -> Result<MessageResponse, ClientError> {
        self.record(Call::Unregister {
            activity: activity.to_string(),
            email: email.to_string(),
            token: token.to_string(),
        });
        if self.fail_mutations.get() {
            return Err(network_down());
        }
        self.authorize(token)?;
        let mut activities = self.activities.borrow_mut();
        let Some((_, details)) = activities.iter_mut().find(|(name, _)| name == activity) else {
            return Err(self.reject(404, "Activity not found"));
        };
        let before = details.participants.len();
        details.participants.retain(|p| p != email);
        if details.participants.len() == before {
            return Err(self.reject(400, "Student is not signed up for this activity"));
        }
        Ok(MessageResponse {
            message: format!("Unregistered {} from {}", email, activity),
        })
    }
}

/// Estado visible de los controles de sesión
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ControlsState {
    pub login_visible: bool,
    pub logged_in_label: Option<String>,
    pub signup_enabled: bool,
    pub delete_visible: bool,
    pub notice_visible: bool,
}

#[derive(Default)]
pub struct RecordingControls {
    state: RefCell<ControlsState>,
    pub delete_updates: Cell<usize>,
}

impl RecordingControls {
    pub fn state(&self) -> ControlsState {
        self.state.borrow().clone()
    }
}

impl AuthControls for RecordingControls {
    fn set_login_control_visible(&self, visible: bool) {
        self.state.borrow_mut().login_visible = visible;
    }

    fn set_logged_in_info(&self, label: Option<&str>) {
        self.state.borrow_mut().logged_in_label = label.map(str::to_string);
    }

    fn set_signup_enabled(&self, enabled: bool) {
        self.state.borrow_mut().signup_enabled = enabled;
    }

    fn set_delete_controls_visible(&self, visible: bool) {
        self.state.borrow_mut().delete_visible = visible;
        self.delete_updates.set(self.delete_updates.get() + 1);
    }

    fn set_auth_notice_visible(&self, visible: bool) {
        self.state.borrow_mut().notice_visible = visible;
    }
}

#[derive(Default)]
pub struct RecordingRoster {
    pub rendered: RefCell<Vec<Activity>>,
    pub placeholder: RefCell<Option<String>>,
    pub options: RefCell<Vec<String>>,
    pub renders: Cell<usize>,
    pub form_resets: Cell<usize>,
}

impl RecordingRoster {
    pub fn roster_of(&self, activity: &str) -> Vec<String> {
        self.rendered
            .borrow()
            .iter()
            .find(|a| a.name == activity)
            .map(|a| a.participants.clone())
            .unwrap_or_default()
    }
}

impl RosterSurface for RecordingRoster {
    fn render(&self, activities: &[Activity]) {
        *self.rendered.borrow_mut() = activities.to_vec();
        *self.placeholder.borrow_mut() = None;
        self.renders.set(self.renders.get() + 1);
    }

    fn show_error(&self, text: &str) {
        self.rendered.borrow_mut().clear();
        *self.placeholder.borrow_mut() = Some(text.to_string());
    }

    fn clear_options(&self) {
        self.options.borrow_mut().clear();
    }

    fn add_option(&self, name: &str) {
        self.options.borrow_mut().push(name.to_string());
    }

    fn reset_signup_form(&self) {
        self.form_resets.set(self.form_resets.get() + 1);
    }
}

#[derive(Default)]
pub struct RecordingLoginForm {
    pub open: Cell<bool>,
    pub resets: Cell<usize>,
    pub error: RefCell<Option<String>>,
}

impl LoginFormSurface for RecordingLoginForm {
    fn open(&self) {
        self.open.set(true);
    }

    fn close(&self) {
        self.open.set(false);
    }

    fn reset(&self) {
        self.resets.set(self.resets.get() + 1);
    }

    fn show_error(&self, text: &str) {
        *self.error.borrow_mut() = Some(text.to_string());
    }

    fn clear_error(&self) {
        *self.error.borrow_mut() = None;
    }
}

#[derive(Default)]
pub struct RecordingBanner {
    pub shown: RefCell<Option<Notification>>,
    pub history: RefCell<Vec<Notification>>,
}

impl RecordingBanner {
    pub fn last(&self) -> Option<Notification> {
        self.history.borrow().last().cloned()
    }
}

impl NotificationSurface for RecordingBanner {
    fn display(&self, notification: &Notification) {
        *self.shown.borrow_mut() = Some(notification.clone());
        self.history.borrow_mut().push(notification.clone());
    }

    fn hide(&self) {
        *self.shown.borrow_mut() = None;
    }
}

/// Reloj virtual: las tareas corren solo al avanzar el tiempo
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    pending: RefCell<Vec<(u64, Box<dyn FnOnce()>)>>,
}

impl ManualScheduler {
    pub fn advance(&self, ms: u64) {
        let target = self.now.get() + ms;
        self.now.set(target);
        let due: Vec<_> = {
            let mut pending = self.pending.borrow_mut();
            let (due, rest): (Vec<_>, Vec<_>) =
                pending.drain(..).partition(|(at, _)| *at <= target);
            *pending = rest;
            due
        };
        for (_, task) in due {
            task();
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.borrow().len()
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let at = self.now.get() + u64::from(delay_ms);
        self.pending.borrow_mut().push((at, task));
    }
}

pub struct Harness {
    pub api: Rc<FakeApi>,
    pub store: Rc<MemoryTokenStore>,
    pub controls: Rc<RecordingControls>,
    pub roster: Rc<RecordingRoster>,
    pub login_form: Rc<RecordingLoginForm>,
    pub banner: Rc<RecordingBanner>,
    pub clock: Rc<ManualScheduler>,
    pub portal: Portal,
}

impl Harness {
    pub fn new(api: FakeApi, stored_token: Option<&str>) -> Self {
        let api = Rc::new(api);
        let store = Rc::new(match stored_token {
            Some(token) => MemoryTokenStore::with_token(token),
            None => MemoryTokenStore::new(),
        });
        let controls = Rc::new(RecordingControls::default());
        let roster = Rc::new(RecordingRoster::default());
        let login_form = Rc::new(RecordingLoginForm::default());
        let banner = Rc::new(RecordingBanner::default());
        let clock = Rc::new(ManualScheduler::default());

        let surfaces = PortalSurfaces {
            controls: controls.clone(),
            roster: roster.clone(),
            login_form: login_form.clone(),
            notifications: banner.clone(),
            scheduler: clock.clone(),
        };
        let portal = Portal::new(&AppConfig::default(), api.clone(), store.clone(), surfaces);

        Self {
            api,
            store,
            controls,
            roster,
            login_form,
            banner,
            clock,
            portal,
        }
    }

    /// Profesor ya autenticado con un token guardado válido
    pub async fn logged_in() -> Self {
        let harness = Self::new(FakeApi::new().with_valid_token(ISSUED_TOKEN), Some(ISSUED_TOKEN));
        assert!(harness.portal.restore_session().await);
        harness
    }

    pub fn stored_token(&self) -> Option<String> {
        self.store.load()
    }
}
