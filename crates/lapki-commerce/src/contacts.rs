//! Shop contact details shown in the contacts section.

use serde::Serialize;

/// Kind of contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    Phone,
    Email,
    Address,
    Social,
}

impl ContactKind {
    /// Card title.
    pub fn title(&self) -> &'static str {
        match self {
            ContactKind::Phone => "Телефон",
            ContactKind::Email => "Email",
            ContactKind::Address => "Адрес",
            ContactKind::Social => "Соцсети",
        }
    }
}

/// One way to reach the shop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub kind: ContactKind,
    pub value: String,
    /// Hours, response time or similar.
    pub note: String,
}

impl ContactChannel {
    fn new(kind: ContactKind, value: &str, note: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
            note: note.to_string(),
        }
    }
}

/// The shop's contact cards, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Contacts {
    channels: Vec<ContactChannel>,
}

impl Contacts {
    pub fn builtin() -> Self {
        Self {
            channels: vec![
                ContactChannel::new(
                    ContactKind::Phone,
                    "+7 (495) 123-45-67",
                    "Ежедневно с 9:00 до 21:00",
                ),
                ContactChannel::new(
                    ContactKind::Email,
                    "info@lapkilakomki.ru",
                    "Ответим в течение 24 часов",
                ),
                ContactChannel::new(
                    ContactKind::Address,
                    "Москва, ул. Примерная, 15",
                    "Магазин и пункт самовывоза",
                ),
                ContactChannel::new(
                    ContactKind::Social,
                    "@lapkilakomki",
                    "Мы в Instagram и Telegram",
                ),
            ],
        }
    }

    pub fn channels(&self) -> &[ContactChannel] {
        &self.channels
    }

    pub fn get(&self, kind: ContactKind) -> Option<&ContactChannel> {
        self.channels.iter().find(|c| c.kind == kind)
    }
}

impl Default for Contacts {
    fn default() -> Self {
        Self::builtin()
    }
}
