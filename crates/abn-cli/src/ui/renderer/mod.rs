//! UI rendering module

mod helpers;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use super::input::InputManager;
use super::layout::{self, FormAreas};
use super::state::{Focus, UiState};
use super::theme::Theme;
use super::view::{self, ResultView};

pub use helpers::border_color;

const TITLE: &str = "Business Name Registration Australia";
const TAGLINE: &str =
    "Here you can register your business name, ABN and tax obligations with one easy application.";
const USAGE_TIP: &str =
    "Tip: You can search by business name or enter an 11-digit ABN for direct lookup";
const KEY_HINTS: &str = "Tab: next  Enter: activate  Ctrl+P: theme  Ctrl+C: quit";
const SEARCH_LABEL: &str = "Check name";
const SEARCHING_LABEL: &str = "Searching...";

/// Rendering context with all necessary references
pub struct RenderCtx<'ctx> {
    /// Form state
    pub state: &'ctx UiState,
    /// Query text field, already styled for this frame
    pub input: &'ctx InputManager,
}

/// Handles rendering of the TUI
pub struct Renderer {
    theme: Theme,
}

impl Renderer {
    /// Creates a new Renderer with the specified theme
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Gets the current theme
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Sets the theme
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
    }

    /// Renders the whole form
    pub fn render(&self, frame: &mut Frame, ctx: &RenderCtx<'_>) {
        let areas = layout::form_areas(frame.area());
        let loading = ctx.state.session.is_loading();
        let view = view::result_view(&ctx.state.session.display());

        self.render_header(frame, areas.header);
        frame.render_widget(ctx.input.input_area(), areas.input);
        self.render_button(
            frame,
            areas.button,
            if loading { SEARCHING_LABEL } else { SEARCH_LABEL },
            ctx.state.focus == Focus::SearchButton,
            loading,
        );
        self.render_error_line(frame, areas.error_line, &view);
        self.render_results(frame, &areas, &view, ctx.state.focus == Focus::TryAnother);
        self.render_footer(frame, areas.footer);
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(self.theme.highlight())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(TAGLINE, Style::default().fg(self.theme.muted()))),
        ];
        let header = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::BOTTOM).border_style(
                Style::default().fg(self.theme.unfocused_border()),
            ));
        frame.render_widget(header, area);
    }

    fn render_button(
        &self,
        frame: &mut Frame,
        area: Rect,
        label: &str,
        focused: bool,
        disabled: bool,
    ) {
        let button = Paragraph::new(Span::styled(
            label,
            helpers::button_style(focused, disabled, self.theme),
        ))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color(focused, disabled, self.theme))),
        );
        frame.render_widget(button, area);
    }

    fn render_error_line(&self, frame: &mut Frame, area: Rect, view: &ResultView) {
        if let Some(message) = &view.inline_error {
            let error = Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(self.theme.failure()),
            ));
            frame.render_widget(error, area);
        }
    }

    fn render_results(
        &self,
        frame: &mut Frame,
        areas: &FormAreas,
        view: &ResultView,
        action_focused: bool,
    ) {
        if !view.has_panel() {
            return;
        }

        let (panel_area, action_area) =
            layout::results_areas(areas.results, view.action.is_some());
        let accent = helpers::tone_color(view.tone, self.theme);

        let mut lines: Vec<Line<'_>> = view
            .rows
            .iter()
            .map(|row| match row.label {
                Some(label) => Line::from(vec![
                    Span::styled(
                        format!("{label}: "),
                        Style::default().fg(accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(row.text.as_str(), Style::default().fg(self.theme.text())),
                ]),
                None => Line::from(Span::styled(
                    row.text.as_str(),
                    Style::default().fg(self.theme.text()),
                )),
            })
            .collect();
        if let Some(tip) = view.tip {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                tip,
                Style::default().fg(self.theme.muted()),
            )));
        }

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .padding(Padding::horizontal(1));
        if let Some(title) = &view.title {
            block = block.title(Span::styled(
                title.as_str(),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            ));
        }

        let panel = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
        frame.render_widget(panel, panel_area);

        if let (Some(label), Some(area)) = (view.action, action_area) {
            self.render_button(frame, area, label, action_focused, false);
        }
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let footer = Paragraph::new(vec![
            Line::from(Span::styled(USAGE_TIP, Style::default().fg(self.theme.muted()))),
            Line::from(Span::styled(KEY_HINTS, Style::default().fg(self.theme.muted()))),
        ]);
        frame.render_widget(footer, area);
    }
}
