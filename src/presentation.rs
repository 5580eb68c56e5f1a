//! Chat-facing layer: callback routing, keyboards and per-chat sessions
//!
//! Everything here is UI glue. Transport failures while tidying up old
//! messages are logged and swallowed so they never block a status write.

use crate::elevator::ElevatorId;
use crate::errors::{Result, TrackerError};
use crate::guard::{FlowEvent, FlowState, transition};
use crate::status::{Reporter, Status};
use crate::tracker::{ReportOutcome, StatusTracker};
use crate::transport::{Button, ChatId, ChatTransport, Keyboard, MessageId, layout};
use crate::uptime::ReportPeriod;

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, instrument, warn};

pub const MENU_TEXT: &str = "Выбери лифт:";
pub const REPORT_MENU_TEXT: &str = "Отчёт по какому лифту?";
pub const CONFIRM_TEXT: &str = "Статус меняет группу (работает ↔ не работает).\nУверен?";
const NO_STATUS_ICON: &str = "➖";

/// Parsed callback payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Callback {
    /// `e:<id>`
    Elevator(ElevatorId),
    /// `s:<id>:<status>`
    Status(ElevatorId, Status),
    /// `c:<id>:<status>`
    Confirm(ElevatorId, Status),
    /// `p:<id>`
    Periods(ElevatorId),
    /// `r:<id>:<period>`
    Report(ElevatorId, ReportPeriod),
}

impl Callback {
    pub fn parse(data: &str) -> Result<Self> {
        let parts: Vec<&str> = data.split(':').collect();
        match parts.as_slice() {
            ["e", id] => Ok(Callback::Elevator(ElevatorId::parse(id)?)),
            ["s", id, key] => Ok(Callback::Status(ElevatorId::parse(id)?, Status::from_key(key)?)),
            ["c", id, key] => Ok(Callback::Confirm(ElevatorId::parse(id)?, Status::from_key(key)?)),
            ["p", id] => Ok(Callback::Periods(ElevatorId::parse(id)?)),
            ["r", id, key] => Ok(Callback::Report(
                ElevatorId::parse(id)?,
                ReportPeriod::from_key(key)?,
            )),
            _ => Err(TrackerError::InvalidCallback(data.to_string())),
        }
    }

    pub fn data(&self) -> String {
        match self {
            Callback::Elevator(id) => format!("e:{}", id),
            Callback::Status(id, status) => format!("s:{}:{}", id, status.key()),
            Callback::Confirm(id, status) => format!("c:{}:{}", id, status.key()),
            Callback::Periods(id) => format!("p:{}", id),
            Callback::Report(id, period) => format!("r:{}:{}", id, period.key()),
        }
    }
}

/// Something the chat network delivered
#[derive(Debug, Clone)]
pub enum Incoming {
    Command {
        chat: ChatId,
        command: String,
        from: Reporter,
    },
    Callback {
        id: String,
        chat: ChatId,
        /// Message carrying the pressed button
        message: Option<MessageId>,
        data: String,
        from: Reporter,
    },
}

/// Per-chat UI state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatSession {
    pub menu_message: Option<MessageId>,
    pub flow: FlowState,
}

/// Session store keyed by chat id
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    sessions: Arc<RwLock<HashMap<ChatId, ChatSession>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, chat: ChatId) -> ChatSession {
        self.sessions
            .read()
            .await
            .get(&chat)
            .copied()
            .unwrap_or_default()
    }

    pub async fn set_menu_message(&self, chat: ChatId, message: MessageId) {
        let mut sessions = self.sessions.write().await;
        sessions.entry(chat).or_default().menu_message = Some(message);
    }

    /// Feed a flow event and return the new state
    pub async fn apply(&self, chat: ChatId, event: FlowEvent) -> FlowState {
        let mut sessions = self.sessions.write().await;
        let session = sessions.entry(chat).or_default();
        session.flow = transition(session.flow, event);
        session.flow
    }
}

pub fn elevator_label(elevator: ElevatorId, status: Option<Status>) -> String {
    let icon = status.map(Status::icon).unwrap_or(NO_STATUS_ICON);
    format!("{} {} {}", elevator.wall_marker(), elevator, icon)
}

pub fn elevators_keyboard(state: &[(ElevatorId, Option<Status>)], columns: usize) -> Keyboard {
    let buttons = state
        .iter()
        .map(|(id, status)| Button::new(elevator_label(*id, *status), Callback::Elevator(*id).data()))
        .collect();
    layout(buttons, columns)
}

pub fn statuses_keyboard(elevator: ElevatorId) -> Keyboard {
    let buttons = Status::ALL
        .iter()
        .map(|s| Button::new(s.label(), Callback::Status(elevator, *s).data()))
        .collect();
    layout(buttons, 1)
}

pub fn confirm_keyboard(elevator: ElevatorId, status: Status) -> Keyboard {
    layout(
        vec![
            Button::new("✅ Да, уверен", Callback::Confirm(elevator, status).data()),
            Button::new("↩️ Нет", Callback::Elevator(elevator).data()),
        ],
        1,
    )
}

pub fn report_elevators_keyboard(columns: usize) -> Keyboard {
    let buttons = ElevatorId::menu_order()
        .map(|id| Button::new(format!("{} {}", id.wall_marker(), id), Callback::Periods(id).data()))
        .collect();
    layout(buttons, columns)
}

pub fn periods_keyboard(elevator: ElevatorId) -> Keyboard {
    let buttons = ReportPeriod::ALL
        .iter()
        .map(|p| Button::new(p.label(), Callback::Report(elevator, *p).data()))
        .collect();
    layout(buttons, 2)
}

fn status_prompt(elevator: ElevatorId) -> String {
    format!("Лифт {}. Укажи статус:", elevator)
}

/// Short popup text for a failed callback. `writing` is set when the
/// callback was trying to record a status.
pub fn alert_text(err: &TrackerError, writing: bool) -> &'static str {
    match err {
        TrackerError::UnknownElevator(_) => "Неизвестный лифт",
        TrackerError::UnknownStatus(_) => "Неизвестный статус",
        TrackerError::UnknownPeriod(_) => "Неизвестный период",
        TrackerError::InvalidCallback(data) if data.is_empty() => "Нет данных",
        TrackerError::InvalidCallback(_) => "Некорректные данные",
        _ if writing => "Не удалось сохранить, попробуй ещё раз",
        _ => "Что-то пошло не так, попробуй ещё раз",
    }
}

/// Routes incoming updates to the tracker and renders replies
pub struct StatusBot<T: ChatTransport> {
    tracker: StatusTracker,
    transport: Arc<T>,
    sessions: SessionStore,
    menu_columns: usize,
}

impl<T: ChatTransport> StatusBot<T> {
    pub fn new(tracker: StatusTracker, transport: Arc<T>, sessions: SessionStore, menu_columns: usize) -> Self {
        Self {
            tracker,
            transport,
            sessions,
            menu_columns,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    /// Handle one update. Errors are reported to the user, not returned,
    /// except when even that fails.
    pub async fn handle(&self, incoming: Incoming) -> Result<()> {
        match incoming {
            Incoming::Command { chat, command, .. } => match command.trim() {
                "/start" => self.show_elevators_menu(chat).await,
                "/report" => {
                    self.transport
                        .send_message(chat, REPORT_MENU_TEXT, Some(&report_elevators_keyboard(self.menu_columns)))
                        .await?;
                    Ok(())
                }
                other => {
                    debug!("Ignoring unknown command {} in chat {}", other, chat);
                    Ok(())
                }
            },
            Incoming::Callback {
                id,
                chat,
                message,
                data,
                from,
            } => {
                let parsed = Callback::parse(&data);
                let writing = matches!(parsed, Ok(Callback::Status(..) | Callback::Confirm(..)));
                let result = match parsed {
                    Ok(callback) => self.on_callback(chat, message, callback, from).await,
                    Err(e) => Err(e),
                };

                match result {
                    Ok(()) => self.transport.answer_callback(&id, None, false).await,
                    Err(e) => {
                        if e.is_validation() {
                            warn!("Rejected callback '{}' in chat {}: {}", data, chat, e);
                        } else {
                            error!("Callback '{}' in chat {} failed: {}", data, chat, e);
                        }
                        self.transport
                            .answer_callback(&id, Some(alert_text(&e, writing)), true)
                            .await
                    }
                }
            }
        }
    }

    #[instrument(skip(self, from))]
    async fn on_callback(
        &self,
        chat: ChatId,
        message: Option<MessageId>,
        callback: Callback,
        from: Reporter,
    ) -> Result<()> {
        match callback {
            Callback::Elevator(elevator) => self.choose_elevator(chat, message, elevator).await,
            Callback::Status(elevator, status) => {
                match self.tracker.report_status(elevator, status, from).await? {
                    ReportOutcome::NeedsConfirmation => {
                        self.sessions
                            .apply(chat, FlowEvent::ConfirmationRequested { elevator, status })
                            .await;
                        let keyboard = confirm_keyboard(elevator, status);
                        match message {
                            Some(message) => {
                                self.transport
                                    .edit_message(chat, message, CONFIRM_TEXT, Some(&keyboard))
                                    .await?
                            }
                            None => {
                                self.transport
                                    .send_message(chat, CONFIRM_TEXT, Some(&keyboard))
                                    .await?;
                            }
                        }
                        Ok(())
                    }
                    ReportOutcome::Recorded(_) => self.after_recorded(chat, message, elevator, status).await,
                }
            }
            Callback::Confirm(elevator, status) => {
                if self.sessions.get(chat).await.flow.pending_confirmation(elevator) != Some(status) {
                    debug!("Confirmation for {} arrived without a pending prompt", elevator);
                }
                self.tracker.confirm_status(elevator, status, from).await?;
                self.after_recorded(chat, message, elevator, status).await
            }
            Callback::Periods(elevator) => {
                let text = format!("Лифт {}. Выбери период:", elevator);
                self.transport
                    .send_message(chat, &text, Some(&periods_keyboard(elevator)))
                    .await?;
                Ok(())
            }
            Callback::Report(elevator, period) => {
                let text = self.tracker.report_text(elevator, period).await?;
                self.transport.send_message(chat, &text, None).await?;
                Ok(())
            }
        }
    }

    async fn choose_elevator(&self, chat: ChatId, message: Option<MessageId>, elevator: ElevatorId) -> Result<()> {
        let previous = self.sessions.get(chat).await.flow;
        let declined = previous.pending_confirmation(elevator).is_some();
        if declined {
            let state = self.sessions.apply(chat, FlowEvent::Declined).await;
            info!("Chat {} declined the status change: {:?}", chat, state);
        }
        self.sessions.apply(chat, FlowEvent::ElevatorChosen(elevator)).await;

        let prompt = status_prompt(elevator);
        let keyboard = statuses_keyboard(elevator);

        // A declined prompt turns back into the status choice in place.
        if let (true, Some(message)) = (declined, message) {
            if self
                .transport
                .edit_message(chat, message, &prompt, Some(&keyboard))
                .await
                .is_ok()
            {
                return Ok(());
            }
        }

        self.transport.send_message(chat, &prompt, Some(&keyboard)).await?;
        Ok(())
    }

    async fn after_recorded(
        &self,
        chat: ChatId,
        message: Option<MessageId>,
        elevator: ElevatorId,
        status: Status,
    ) -> Result<()> {
        self.sessions
            .apply(chat, FlowEvent::Recorded { elevator, status })
            .await;

        self.refresh_elevators_menu(chat).await;

        if let Some(message) = message {
            if let Err(e) = self.transport.delete_message(chat, message).await {
                warn!("Could not delete message {} in chat {}: {}", message, chat, e);
            }
        }
        Ok(())
    }

    /// Replace the chat's menu with a fresh one
    pub async fn show_elevators_menu(&self, chat: ChatId) -> Result<()> {
        if let Some(old) = self.sessions.get(chat).await.menu_message {
            if let Err(e) = self.transport.delete_message(chat, old).await {
                debug!("Old menu {} in chat {} not deleted: {}", old, chat, e);
            }
        }

        let state = self.tracker.menu_state().await?;
        let keyboard = elevators_keyboard(&state, self.menu_columns);
        let message = self.transport.send_message(chat, MENU_TEXT, Some(&keyboard)).await?;

        self.sessions.set_menu_message(chat, message).await;
        self.sessions.apply(chat, FlowEvent::Reset).await;
        Ok(())
    }

    /// Redraw status icons in the remembered menu, if any
    async fn refresh_elevators_menu(&self, chat: ChatId) {
        let Some(menu) = self.sessions.get(chat).await.menu_message else {
            return;
        };

        let state = match self.tracker.menu_state().await {
            Ok(state) => state,
            Err(e) => {
                warn!("Could not read menu state for chat {}: {}", chat, e);
                return;
            }
        };

        let keyboard = elevators_keyboard(&state, self.menu_columns);
        if let Err(e) = self
            .transport
            .edit_message(chat, menu, MENU_TEXT, Some(&keyboard))
            .await
        {
            debug!("Menu {} in chat {} not refreshed: {}", menu, chat, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event_log::EventLogStore;
    use crate::tracker::tests::{ManualClock, start};
    use async_trait::async_trait;
    use std::sync::Mutex;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Send { text: String, keyboard: Option<Keyboard> },
        Edit { message: MessageId, text: String },
        Delete { message: MessageId },
        Answer { text: Option<String>, alert: bool },
    }

    #[derive(Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<Call>>,
        fail_cleanup: bool,
    }

    impl RecordingTransport {
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl ChatTransport for RecordingTransport {
        async fn send_message(&self, _chat: ChatId, text: &str, keyboard: Option<&Keyboard>) -> Result<MessageId> {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Call::Send {
                text: text.to_string(),
                keyboard: keyboard.cloned(),
            });
            Ok(100 + calls.len() as MessageId)
        }

        async fn edit_message(&self, _chat: ChatId, message: MessageId, text: &str, _keyboard: Option<&Keyboard>) -> Result<()> {
            if self.fail_cleanup {
                return Err(TrackerError::Transport("message is not modified".to_string()));
            }
            self.calls.lock().unwrap().push(Call::Edit {
                message,
                text: text.to_string(),
            });
            Ok(())
        }

        async fn delete_message(&self, _chat: ChatId, message: MessageId) -> Result<()> {
            if self.fail_cleanup {
                return Err(TrackerError::Transport("message can't be deleted".to_string()));
            }
            self.calls.lock().unwrap().push(Call::Delete { message });
            Ok(())
        }

        async fn answer_callback(&self, _id: &str, text: Option<&str>, alert: bool) -> Result<()> {
            self.calls.lock().unwrap().push(Call::Answer {
                text: text.map(str::to_string),
                alert,
            });
            Ok(())
        }
    }

    const CHAT: ChatId = 555;

    fn bot(dir: &TempDir, transport: RecordingTransport) -> (StatusBot<RecordingTransport>, Arc<RecordingTransport>) {
        let tracker = StatusTracker::with_clock(
            EventLogStore::new(dir.path()),
            Arc::new(ManualClock::new(start())),
        );
        let transport = Arc::new(transport);
        (StatusBot::new(tracker, transport.clone(), SessionStore::new(), 2), transport)
    }

    fn user() -> Reporter {
        Reporter::new(9, Some("anna".to_string()), None)
    }

    fn press(data: &str, message: Option<MessageId>) -> Incoming {
        Incoming::Callback {
            id: "cb".to_string(),
            chat: CHAT,
            message,
            data: data.to_string(),
            from: user(),
        }
    }

    fn command(text: &str) -> Incoming {
        Incoming::Command {
            chat: CHAT,
            command: text.to_string(),
            from: user(),
        }
    }

    async fn log_len(dir: &TempDir, elevator: &str) -> usize {
        EventLogStore::new(dir.path())
            .read_all(ElevatorId::parse(elevator).unwrap())
            .await
            .unwrap()
            .len()
    }

    #[test]
    fn test_callback_parse() {
        let id = ElevatorId::parse("8240").unwrap();
        assert_eq!(Callback::parse("e:8240").unwrap(), Callback::Elevator(id));
        assert_eq!(Callback::parse("s:8240:warn").unwrap(), Callback::Status(id, Status::Warn));
        assert_eq!(Callback::parse("c:8240:bad").unwrap(), Callback::Confirm(id, Status::Bad));
        assert_eq!(
            Callback::parse("r:8240:7d").unwrap(),
            Callback::Report(id, ReportPeriod::Week)
        );
        assert_eq!(Callback::parse("s:8240:ok").unwrap().data(), "s:8240:ok");

        assert!(matches!(Callback::parse("e:1"), Err(TrackerError::UnknownElevator(_))));
        assert!(matches!(Callback::parse("s:8240:meh"), Err(TrackerError::UnknownStatus(_))));
        assert!(matches!(Callback::parse("s:8240"), Err(TrackerError::InvalidCallback(_))));
        assert!(matches!(Callback::parse(""), Err(TrackerError::InvalidCallback(_))));
    }

    #[test]
    fn test_elevator_labels() {
        let id = ElevatorId::parse("8241").unwrap();
        assert_eq!(elevator_label(id, None), "🟧 8241 ➖");
        assert_eq!(elevator_label(id, Some(Status::Bad)), "🟧 8241 ❌");
    }

    #[tokio::test]
    async fn test_start_replaces_previous_menu() {
        let dir = TempDir::new().unwrap();
        let (bot, transport) = bot(&dir, RecordingTransport::default());

        bot.handle(command("/start")).await.unwrap();
        let first_menu = bot.sessions().get(CHAT).await.menu_message.unwrap();
        bot.handle(command("/start")).await.unwrap();

        let calls = transport.calls();
        assert!(calls.contains(&Call::Delete { message: first_menu }));
        match &calls[0] {
            Call::Send { text, keyboard: Some(keyboard) } => {
                assert_eq!(text, MENU_TEXT);
                assert_eq!(keyboard.len(), 2);
                assert_eq!(keyboard[0][0].data, "e:8240");
                assert_eq!(keyboard[1][0].data, "e:8243");
            }
            other => panic!("unexpected first call {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unguarded_status_is_recorded_and_message_removed() {
        let dir = TempDir::new().unwrap();
        let (bot, transport) = bot(&dir, RecordingTransport::default());

        bot.handle(command("/start")).await.unwrap();
        bot.handle(press("s:8242:ok", Some(7))).await.unwrap();

        assert_eq!(log_len(&dir, "8242").await, 1);
        let calls = transport.calls();
        assert!(calls.contains(&Call::Delete { message: 7 }));
        assert!(calls.iter().any(|c| matches!(c, Call::Edit { text, .. } if text == MENU_TEXT)));
        assert_eq!(calls.last(), Some(&Call::Answer { text: None, alert: false }));
    }

    #[tokio::test]
    async fn test_guarded_change_asks_then_confirms() {
        let dir = TempDir::new().unwrap();
        let (bot, transport) = bot(&dir, RecordingTransport::default());

        bot.handle(press("s:8240:ok", Some(1))).await.unwrap();
        bot.handle(press("s:8240:ok", Some(2))).await.unwrap();
        bot.handle(press("s:8240:bad", Some(3))).await.unwrap();

        assert_eq!(log_len(&dir, "8240").await, 2);
        assert!(transport
            .calls()
            .contains(&Call::Edit { message: 3, text: CONFIRM_TEXT.to_string() }));
        let elevator = ElevatorId::parse("8240").unwrap();
        assert_eq!(
            bot.sessions().get(CHAT).await.flow.pending_confirmation(elevator),
            Some(Status::Bad)
        );

        bot.handle(press("c:8240:bad", Some(3))).await.unwrap();
        assert_eq!(log_len(&dir, "8240").await, 3);
        assert_eq!(
            bot.sessions().get(CHAT).await.flow,
            FlowState::Recorded { elevator, status: Status::Bad }
        );
    }

    #[tokio::test]
    async fn test_declined_change_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let (bot, transport) = bot(&dir, RecordingTransport::default());

        bot.handle(press("s:8243:bad", Some(1))).await.unwrap();
        bot.handle(press("s:8243:bad", Some(2))).await.unwrap();
        bot.handle(press("s:8243:warn", Some(3))).await.unwrap();
        bot.handle(press("e:8243", Some(3))).await.unwrap();

        assert_eq!(log_len(&dir, "8243").await, 2);
        let elevator = ElevatorId::parse("8243").unwrap();
        assert_eq!(
            bot.sessions().get(CHAT).await.flow,
            FlowState::AwaitingStatusChoice { elevator }
        );
        assert!(transport
            .calls()
            .contains(&Call::Edit { message: 3, text: "Лифт 8243. Укажи статус:".to_string() }));
    }

    #[tokio::test]
    async fn test_cleanup_failures_do_not_block_recording() {
        let dir = TempDir::new().unwrap();
        let (bot, transport) = bot(
            &dir,
            RecordingTransport {
                fail_cleanup: true,
                ..Default::default()
            },
        );

        bot.handle(command("/start")).await.unwrap();
        bot.handle(command("/start")).await.unwrap();
        bot.handle(press("s:8241:warn", Some(4))).await.unwrap();

        assert_eq!(log_len(&dir, "8241").await, 1);
        assert_eq!(transport.calls().last(), Some(&Call::Answer { text: None, alert: false }));
    }

    #[tokio::test]
    async fn test_invalid_callbacks_alert_and_write_nothing() {
        let dir = TempDir::new().unwrap();
        let (bot, transport) = bot(&dir, RecordingTransport::default());

        bot.handle(press("s:9999:ok", Some(1))).await.unwrap();
        bot.handle(press("s:8240:great", Some(1))).await.unwrap();
        bot.handle(press("c:8240", Some(1))).await.unwrap();

        for elevator in ["8240", "8241", "8242", "8243"] {
            assert_eq!(log_len(&dir, elevator).await, 0);
        }
        let alerts: Vec<_> = transport
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Answer { text: Some(text), alert: true } => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(
            alerts,
            vec!["Неизвестный лифт", "Неизвестный статус", "Некорректные данные"]
        );
    }

    #[tokio::test]
    async fn test_report_flow_sends_text() {
        let dir = TempDir::new().unwrap();
        let (bot, transport) = bot(&dir, RecordingTransport::default());

        bot.handle(command("/report")).await.unwrap();
        bot.handle(press("p:8240", Some(1))).await.unwrap();
        bot.handle(press("r:8240:24h", Some(2))).await.unwrap();

        let texts: Vec<String> = transport
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Send { text, .. } => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[0], REPORT_MENU_TEXT);
        assert!(texts[2].starts_with("Лифт 8240 за 24 часа:"));
        assert!(texts[2].contains(crate::uptime::NO_DATA));
    }

    #[tokio::test]
    async fn test_report_read_failure_alert_is_neutral() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("logs");
        std::fs::write(&blocker, "not a directory").unwrap();
        let tracker = StatusTracker::with_clock(
            EventLogStore::new(&blocker),
            Arc::new(ManualClock::new(start())),
        );
        let transport = Arc::new(RecordingTransport::default());
        let bot = StatusBot::new(tracker, transport.clone(), SessionStore::new(), 2);

        bot.handle(press("r:8240:24h", Some(2))).await.unwrap();
        bot.handle(press("s:8240:ok", Some(3))).await.unwrap();

        let alerts: Vec<_> = transport
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Answer { text: Some(text), alert: true } => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(
            alerts,
            vec!["Что-то пошло не так, попробуй ещё раз", "Не удалось сохранить, попробуй ещё раз"]
        );
    }
}
