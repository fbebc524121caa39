//! Email detail view component (right pane).

use chrono::{DateTime, Local, Utc};
use iced::widget::{Space, button, column, container, row, scrollable, text};
use iced::{Element, Length};

use mailpane_core::Email;

use crate::message::Message;
use crate::style::{
    content_style, detail_header_style, ghost_button_style, palette, scrollable_style,
};

/// Renders the detail panel for the open email.
///
/// The selection is a value copy: it keeps rendering even when its list
/// entry has been removed underneath it.
pub fn view_email_detail(selected: Option<&Email>, is_loading: bool) -> Element<'static, Message> {
    if is_loading {
        return container(
            column![
                text("\u{23F3}").size(48),
                text("Loading email...").size(16).style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.text_secondary),
                    }
                }),
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        )
        .center_x(Length::FillPortion(3))
        .center_y(Length::Fill)
        .style(content_style)
        .into();
    }

    selected.map_or_else(view_empty, view_email)
}

/// Renders empty state when no email is open.
fn view_empty() -> Element<'static, Message> {
    container(
        column![
            text("\u{1F4E7}").size(64),
            text("Select an email to read").size(16).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_secondary),
                }
            }),
        ]
        .spacing(16)
        .align_x(iced::Alignment::Center),
    )
    .center_x(Length::FillPortion(3))
    .center_y(Length::Fill)
    .style(content_style)
    .into()
}

/// Renders the open email.
fn view_email(email: &Email) -> Element<'static, Message> {
    let delete_btn = button(text("\u{1F5D1}").size(15).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.accent_red),
        }
    }))
    .padding([6, 10])
    .style(ghost_button_style)
    .on_press(Message::DeleteEmail(email.id));

    let close_btn = button(text("\u{2715}").size(14).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    }))
    .padding([6, 10])
    .style(ghost_button_style)
    .on_press(Message::ClearSelection);

    let toolbar = row![
        Space::new().width(Length::Fill),
        delete_btn,
        close_btn,
    ]
    .spacing(4)
    .align_y(iced::Alignment::Center);

    let mut subject_row = row![
        text(email.subject.clone()).size(20).font(iced::Font {
            weight: iced::font::Weight::Semibold,
            ..Default::default()
        })
    ]
    .spacing(8)
    .align_y(iced::Alignment::Center);

    if email.is_flagged {
        subject_row = subject_row.push(text("\u{2B50}").size(15).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.accent_yellow),
            }
        }));
    }

    let from = text(format!("{} <{}>", email.from_name, email.from_email))
        .size(13)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_secondary),
            }
        });

    let date = text(format_received_full(&email.received_at))
        .size(12)
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        });

    let header = container(
        column![toolbar, subject_row, from, date].spacing(6),
    )
    .width(Length::Fill)
    .padding([12, 18])
    .style(detail_header_style);

    let body = container(text(email.body.clone()).size(14))
        .width(Length::Fill)
        .padding([16, 18]);

    container(
        column![
            header,
            scrollable(body)
                .height(Length::Fill)
                .style(scrollable_style),
        ]
        .width(Length::Fill),
    )
    .width(Length::FillPortion(3))
    .height(Length::Fill)
    .style(content_style)
    .into()
}

/// Formats the full receive timestamp for the detail header.
fn format_received_full(received_at: &DateTime<Utc>) -> String {
    received_at
        .with_timezone(&Local)
        .format("%a, %d %b %Y %H:%M")
        .to_string()
}
