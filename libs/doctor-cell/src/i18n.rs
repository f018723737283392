use chrono::Weekday;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en")]
    En,
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
}

/// Every user-facing string the doctor cell produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NameRequired,
    SpecialtyRequired,
    PriceRequired,
    PriceTooLarge,
    WeekDayRange,
    FromTimeRequired,
    ToTimeRequired,
    InvalidId,
    InvalidTime,
    StartBeforeEnd,
}

impl Locale {
    /// Accepts BCP-47 style tags such as `en`, `en-US`, `pt`, `pt-BR`, `pt_br`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let primary = tag
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match primary.as_str() {
            "en" => Some(Locale::En),
            "pt" => Some(Locale::PtBr),
            _ => None,
        }
    }

    pub fn message(&self, message: Message) -> &'static str {
        match self {
            Locale::En => match message {
                Message::NameRequired
                | Message::SpecialtyRequired
                | Message::PriceRequired
                | Message::FromTimeRequired
                | Message::ToTimeRequired => "required",
                Message::PriceTooLarge => "must be at most 2147483647",
                Message::WeekDayRange => "must be between 0 and 6",
                Message::InvalidId => "must be a valid identifier",
                Message::InvalidTime => "must use the HH:MM or HH:MM:SS format",
                Message::StartBeforeEnd => "start time must precede end time",
            },
            Locale::PtBr => match message {
                Message::NameRequired => "Nome é obrigatório",
                Message::SpecialtyRequired => "Especialidade é obrigatória",
                Message::PriceRequired => "Preço da consulta é obrigatório.",
                Message::PriceTooLarge => "Preço da consulta excede o valor máximo.",
                Message::WeekDayRange => "Dia da semana deve estar entre 0 e 6",
                Message::FromTimeRequired => "Horário de início é obrigatório",
                Message::ToTimeRequired => "Hora da término é obrigatório",
                Message::InvalidId => "Identificador inválido",
                Message::InvalidTime => "Horário deve usar o formato HH:MM ou HH:MM:SS",
                Message::StartBeforeEnd => "Horário de início deve ser anterior ao horário de término.",
            },
        }
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match self {
            Locale::En => match weekday {
                Weekday::Sun => "Sunday",
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
            },
            Locale::PtBr => match weekday {
                Weekday::Sun => "Domingo",
                Weekday::Mon => "Segunda",
                Weekday::Tue => "Terça",
                Weekday::Wed => "Quarta",
                Weekday::Thu => "Quinta",
                Weekday::Fri => "Sexta",
                Weekday::Sat => "Sábado",
            },
        }
    }

    /// Joins two weekday names into a range label ("Monday to Friday").
    pub fn weekday_range(&self, from: Weekday, to: Weekday) -> String {
        let connector = match self {
            Locale::En => "to",
            Locale::PtBr => "a",
        };
        format!("{} {} {}", self.weekday_name(from), connector, self.weekday_name(to))
    }

    /// Formats integer cents for display. The model never leaves cents.
    pub fn format_price(&self, cents: i32) -> String {
        let sign = if cents < 0 { "-" } else { "" };
        let abs = cents.unsigned_abs();
        let (units, fraction) = (abs / 100, abs % 100);

        match self {
            Locale::En => format!("{}{}.{:02}", sign, units, fraction),
            Locale::PtBr => format!("{}R$ {},{:02}", sign, units, fraction),
        }
    }
}
