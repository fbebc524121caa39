//! Header/toolbar view component.

use iced::widget::{Space, button, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::style::palette::ThemeMode;
use crate::style::{ghost_button_style, header_style, palette};

/// Renders the application header/toolbar.
pub fn view_header(is_logged_in: bool, theme_mode: ThemeMode) -> Element<'static, Message> {
    let title = text("Mailpane")
        .size(20)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|_theme| {
            let p = palette::current();
            text::Style {
                color: Some(p.primary),
            }
        });

    let theme_icon = match theme_mode {
        ThemeMode::Light => "\u{1F319}", // moon: switch to dark
        ThemeMode::Dark => "\u{2600}",   // sun: switch to light
    };
    let theme_btn = button(text(theme_icon).size(14))
        .padding([6, 10])
        .style(ghost_button_style)
        .on_press(Message::ToggleTheme);

    let mut actions = row![].spacing(4).align_y(iced::Alignment::Center);

    if is_logged_in {
        actions = actions.push(
            button(text("Refresh").size(13))
                .padding([6, 12])
                .style(ghost_button_style)
                .on_press(Message::RefreshEmails),
        );
        actions = actions.push(
            button(text("Sign out").size(13))
                .padding([6, 12])
                .style(ghost_button_style)
                .on_press(Message::SignOut),
        );
    }

    actions = actions.push(theme_btn);

    container(
        row![title, Space::new().width(Length::Fill), actions]
            .spacing(12)
            .align_y(iced::Alignment::Center)
            .padding([10, 16]),
    )
    .width(Length::Fill)
    .style(header_style)
    .into()
}
