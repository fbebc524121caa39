//! Email list view component.
//!
//! Each row is rendered through its [`ItemState`]: hover swaps the
//! timestamp for the action icons, the busy indicator supersedes both, and
//! the body renders clamped or expanded.

use std::collections::HashMap;

use chrono::{DateTime, Local, Utc};
use iced::widget::{Column, Space, button, column, container, mouse_area, row, scrollable, text};
use iced::{Background, Border, Element, Length};

use mailpane_core::{Email, EmailId};

use crate::message::Message;
use crate::model::{ItemSlot, ItemState, is_clamped, preview};
use crate::style::{
    ghost_button_style, icon_button_style, list_style, palette, row_border_style,
    row_hovered_style, row_selected_style, row_style, scrollable_style,
};

/// Renders the email list panel (left pane).
pub fn view_email_list(
    emails: &[Email],
    selected: Option<EmailId>,
    items: &HashMap<EmailId, ItemState>,
    is_loading: bool,
) -> Element<'static, Message> {
    // Loading state takes over the whole panel
    if is_loading {
        return container(
            column![
                text("\u{23F3}").size(48),
                text("Loading emails...").size(16).style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.text_secondary),
                    }
                }),
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        )
        .center_x(Length::FillPortion(2))
        .center_y(Length::Fill)
        .style(list_style)
        .into();
    }

    if emails.is_empty() {
        return container(
            column![
                text("\u{1F4ED}").size(48),
                text("No emails").size(16).style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.text_secondary),
                    }
                }),
                button(text("Refresh").size(14))
                    .padding([8, 16])
                    .style(ghost_button_style)
                    .on_press(Message::RefreshEmails),
            ]
            .spacing(12)
            .align_x(iced::Alignment::Center),
        )
        .center_x(Length::FillPortion(2))
        .center_y(Length::Fill)
        .style(list_style)
        .into();
    }

    let rows: Vec<Element<'static, Message>> = emails
        .iter()
        .map(|email| {
            let item = items.get(&email.id).copied().unwrap_or_default();
            view_email_row(email, selected == Some(email.id), item)
        })
        .collect();

    container(
        scrollable(Column::with_children(rows))
            .height(Length::Fill)
            .style(scrollable_style),
    )
    .width(Length::FillPortion(2))
    .height(Length::Fill)
    .style(list_style)
    .into()
}

/// Renders a single email row.
#[allow(clippy::too_many_lines)]
fn view_email_row(email: &Email, is_selected: bool, item: ItemState) -> Element<'static, Message> {
    // Sender name - bold if unread
    let from_weight = if email.is_read {
        iced::font::Weight::Normal
    } else {
        iced::font::Weight::Semibold
    };

    let from = text(email.from_name.clone())
        .size(14)
        .font(iced::Font {
            weight: from_weight,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_primary),
            }
        });

    // Indicators row
    let mut indicators = row![].spacing(4);

    if email.is_flagged {
        indicators = indicators.push(text("\u{2B50}").size(11).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.accent_yellow),
            }
        }));
    }

    if !email.is_read {
        indicators = indicators.push(container(text("")).width(8).height(8).style(|_theme| {
            let p = palette::current();
            container::Style {
                background: Some(Background::Color(p.unread)),
                border: Border {
                    radius: 4.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        }));
    }

    let spacer = Space::new().width(Length::Fill);

    // Trailing slot: timestamp, hover actions, or busy indicator
    let slot = view_slot(email, item);

    let header_row = row![from, indicators, spacer, slot]
        .spacing(6)
        .align_y(iced::Alignment::Center);

    // Subject - bold if unread
    let subject = text(email.subject.clone())
        .size(13)
        .font(iced::Font {
            weight: from_weight,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_primary),
            }
        });

    // Body: clamped preview or full text
    let body_text = if item.body_expanded {
        email.body.clone()
    } else {
        preview(&email.body)
    };
    let body = text(body_text).size(12).style(|_theme| {
        let p = palette::current();
        text::Style {
            color: Some(p.text_secondary),
        }
    });

    let mut content = column![header_row, subject, body].spacing(4);

    // Expand control only when there is more to show
    if is_clamped(&email.body) {
        let label = if item.body_expanded {
            "Show less"
        } else {
            "Show more"
        };
        content = content.push(
            button(text(label).size(11).style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_muted),
                }
            }))
            .padding([2, 6])
            .style(ghost_button_style)
            .on_press(Message::ToggleBody(email.id)),
        );
    }

    // Row styling: selection wins over hover
    let style_fn = if is_selected {
        row_selected_style
    } else if item.hovered {
        row_hovered_style
    } else {
        row_style
    };

    let surface = container(content)
        .width(Length::Fill)
        .padding([10, 14])
        .style(style_fn);

    let interactive = mouse_area(surface)
        .on_enter(Message::ItemEntered(email.id))
        .on_exit(Message::ItemExited(email.id))
        .on_press(Message::SelectEmail(email.id));

    container(interactive).style(row_border_style).into()
}

/// Renders the trailing slot of a row header.
fn view_slot(email: &Email, item: ItemState) -> Element<'static, Message> {
    match item.slot() {
        ItemSlot::Timestamp => text(format_received(&email.received_at))
            .size(12)
            .style(|_theme| {
                let p = palette::current();
                text::Style {
                    color: Some(p.text_muted),
                }
            })
            .into(),
        ItemSlot::Actions => {
            let mut actions = row![].spacing(2);

            if !email.is_read {
                actions = actions.push(
                    button(text("\u{2713}").size(13))
                        .padding([2, 6])
                        .style(icon_button_style)
                        .on_press(Message::MarkRead(email.id)),
                );
            }

            actions = actions.push(
                button(text("\u{1F5D1}").size(13).style(|_theme| {
                    let p = palette::current();
                    text::Style {
                        color: Some(p.accent_red),
                    }
                }))
                .padding([2, 6])
                .style(icon_button_style)
                .on_press(Message::DeleteEmail(email.id)),
            );

            actions.into()
        }
        ItemSlot::Busy => text("\u{23F3}").size(12).style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.text_muted),
            }
        })
        .into(),
    }
}

/// Formats a receive timestamp for the list: time of day for today,
/// day + month otherwise.
fn format_received(received_at: &DateTime<Utc>) -> String {
    let local = received_at.with_timezone(&Local);
    if local.date_naive() == Local::now().date_naive() {
        local.format("%H:%M").to_string()
    } else {
        local.format("%d %b").to_string()
    }
}
