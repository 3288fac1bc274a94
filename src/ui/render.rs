//! Screen rendering. One draw path per screen variant, total over the
//! state machine so a new screen cannot be forgotten here.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::Category;
use crate::store::StorageBackend;
use crate::ui::app::{App, InfoCard};
use crate::ui::game::{AchievementsPane, GameScreen};
use crate::ui::theme;
use crate::widget::WidgetView;

pub fn draw<S: StorageBackend>(frame: &mut Frame<'_>, app: &App<S>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    draw_header(frame, app, chunks[0]);

    match app.screen() {
        GameScreen::Start => draw_start(frame, app, chunks[1]),
        GameScreen::SelectWord { category } => draw_select_word(frame, app, chunks[1], *category),
        GameScreen::Learning { category, index } => {
            draw_practice(frame, app, chunks[1], *category, *index, false)
        }
        GameScreen::Quiz { category, index } => {
            draw_practice(frame, app, chunks[1], *category, *index, true)
        }
        GameScreen::Celebration { category, index } => {
            draw_practice(frame, app, chunks[1], *category, *index, false);
            draw_celebration(frame, area, category.character(*index).unwrap_or(""));
        }
        GameScreen::Achievements { pane } => draw_achievements(frame, app, chunks[1], area, pane),
    }

    draw_footer(frame, app, chunks[2]);
}

fn draw_header<S: StorageBackend>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " 筆順大冒險 ",
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("一邊玩一邊學寫字！", Style::default().fg(theme::SECONDARY)),
        Span::raw("   "),
        Span::styled(
            format!("⭐ 已學會 {} 個字", app.mastered_count()),
            Style::default().fg(theme::ACCENT),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER));
    frame.render_widget(Paragraph::new(title).block(block), area);
}

fn draw_footer<S: StorageBackend>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let hints = match app.screen() {
        GameScreen::Start => "1-4 選主題  a 成就  q 離開",
        GameScreen::SelectWord { .. } => "1-9,0 選字  Esc 回首頁",
        GameScreen::Learning { .. } => "r 看示範  Enter 我學會了，去測驗！  Esc 返回",
        GameScreen::Quiz { .. } => "空白鍵 一筆一畫寫字  Esc 返回",
        GameScreen::Celebration { .. } => "Enter 下一個字",
        GameScreen::Achievements { pane } => match pane {
            AchievementsPane::Overview => "g 生成頭像  u 上傳頭像  c 清除紀錄  Esc 回首頁",
            AchievementsPane::ConfirmClear => "y 確定清除  n 取消",
            AchievementsPane::AvatarPrompt { .. } | AchievementsPane::UploadPath { .. } => {
                "Enter 送出  Esc 取消"
            }
        },
    };
    let mut lines = vec![Line::from(Span::styled(
        hints,
        Style::default().fg(theme::MUTED),
    ))];
    if let Some(notice) = app.latest_notice() {
        lines.insert(
            0,
            Line::from(Span::styled(notice, Style::default().fg(theme::PRIMARY))),
        );
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_start<S: StorageBackend>(frame: &mut Frame<'_>, app: &App<S>, area: Rect) {
    let mut lines = vec![Line::default()];
    for (i, category) in Category::ALL.iter().enumerate() {
        let progress = app.progress(*category);
        let trophy = if progress.complete { " 🏆" } else { "" };
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. {}  ", i + 1, category.title()),
                Style::default()
                    .fg(theme::SECONDARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} / {}{trophy}", progress.count, progress.total),
                Style::default().fg(if progress.complete {
                    theme::ACCENT
                } else {
                    theme::MUTED
                }),
            ),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  選一個主題開始練習吧！",
        Style::default().fg(theme::PRIMARY),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 選主題 ")
        .border_style(Style::default().fg(theme::SECONDARY));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_select_word<S: StorageBackend>(
    frame: &mut Frame<'_>,
    app: &App<S>,
    area: Rect,
    category: Category,
) {
    let mut lines = vec![Line::default()];
    for (i, character) in category.characters().iter().enumerate() {
        let key = if i == 9 { 0 } else { i + 1 };
        let mark = if app.is_mastered(character) { "✅" } else { "⭐" };
        lines.push(Line::from(vec![
            Span::styled(format!("  {key}. "), Style::default().fg(theme::MUTED)),
            Span::styled(
                format!("{character} "),
                Style::default()
                    .fg(theme::BORDER)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(mark),
        ]));
    }

    let progress = app.progress(category);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " {} ({}/{}) ",
            category.title(),
            progress.count,
            progress.total
        ))
        .border_style(Style::default().fg(theme::SECONDARY));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_practice<S: StorageBackend>(
    frame: &mut Frame<'_>,
    app: &App<S>,
    area: Rect,
    category: Category,
    index: usize,
    quizzing: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let title = format!(
        " {} ({}/{}) ",
        category.title(),
        index + 1,
        category.len()
    );
    draw_writer(frame, chunks[0], app.widget_view(), &title, quizzing);
    draw_info_card(frame, chunks[1], app.info_card());
}

fn draw_writer(
    frame: &mut Frame<'_>,
    area: Rect,
    view: Option<WidgetView>,
    title: &str,
    quizzing: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(theme::BORDER));

    let Some(view) = view else {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    };

    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1), Constraint::Min(0)])
        .split(block.inner(area));
    frame.render_widget(block, area);

    // The quiz hides the full character, matching show-character-off in
    // the shipped widget.
    let glyph = if view.quizzing {
        "？"
    } else {
        view.character.as_str()
    };
    frame.render_widget(
        Paragraph::new(Span::styled(
            glyph.to_string(),
            Style::default()
                .fg(theme::BORDER)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        inner_chunks[0],
    );

    let (label, done) = if quizzing {
        ("★ 請按照正確順序寫一遍 ★", view.strokes_traced)
    } else {
        ("筆順示範", view.strokes_shown)
    };
    let ratio = if view.total_strokes == 0 {
        0.0
    } else {
        (done as f64 / view.total_strokes as f64).min(1.0)
    };
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(theme::SECONDARY))
            .label(format!("{label}  {done}/{}", view.total_strokes))
            .ratio(ratio),
        inner_chunks[1],
    );
}

fn draw_info_card(frame: &mut Frame<'_>, area: Rect, card: &InfoCard) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 小字典 ")
        .border_style(Style::default().fg(theme::SECONDARY));

    let lines = if card.loading {
        vec![Line::from(Span::styled(
            "載入中…",
            Style::default().fg(theme::MUTED),
        ))]
    } else if let Some(info) = &card.info {
        vec![
            Line::from(vec![
                Span::styled(
                    format!("{}  ", info.word),
                    Style::default()
                        .fg(theme::BORDER)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(info.pinyin.clone(), Style::default().fg(theme::SECONDARY)),
            ]),
            Line::from(Span::raw(info.meaning.clone())),
            Line::from(Span::styled(
                format!("「{}」", info.example_sentence),
                Style::default().fg(theme::PRIMARY),
            )),
        ]
    } else {
        Vec::new()
    };

    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}

fn draw_celebration(frame: &mut Frame<'_>, area: Rect, character: &str) {
    let popup = centered_rect(50, 40, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::default(),
        Line::from(Span::raw("🎉")).alignment(Alignment::Center),
        Line::from(Span::styled(
            "太棒了！",
            Style::default()
                .fg(theme::PRIMARY)
                .add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        Line::from(Span::styled(
            format!("你正確寫出了「{character}」！"),
            Style::default().fg(theme::SECONDARY),
        ))
        .alignment(Alignment::Center),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::ACCENT));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn draw_achievements<S: StorageBackend>(
    frame: &mut Frame<'_>,
    app: &App<S>,
    body: Rect,
    full: Rect,
    pane: &AchievementsPane,
) {
    let tier = app.tier();
    let avatar = if app.avatar_generating() {
        "生成中…"
    } else if app.has_avatar() {
        "已設定 🖼"
    } else {
        "還沒有"
    };

    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{} {}", tier.badge(), tier.title()),
                Style::default()
                    .fg(theme::ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  共學會 {} 個字", app.mastered_count()),
            Style::default().fg(theme::PRIMARY),
        )),
        Line::from(Span::styled(
            format!("  頭像：{avatar}"),
            Style::default().fg(theme::SECONDARY),
        )),
        Line::default(),
    ];
    for category in Category::ALL {
        let progress = app.progress(category);
        lines.push(Line::from(Span::raw(format!(
            "  {}  {} / {}{}",
            category.title(),
            progress.count,
            progress.total,
            if progress.complete { " 🏆" } else { "" }
        ))));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 我的成就 ")
        .border_style(Style::default().fg(theme::ACCENT));
    frame.render_widget(Paragraph::new(lines).block(block), body);

    match pane {
        AchievementsPane::Overview => {}
        AchievementsPane::ConfirmClear => {
            draw_input_popup(frame, full, " 確定要清除嗎？ ", "所有進度和頭像都會不見喔！");
        }
        AchievementsPane::AvatarPrompt { input } => {
            draw_input_popup(frame, full, " 描述你想要的頭像 ", input);
        }
        AchievementsPane::UploadPath { input } => {
            draw_input_popup(frame, full, " 圖片檔案路徑 ", input);
        }
    }
}

fn draw_input_popup(frame: &mut Frame<'_>, area: Rect, title: &str, content: &str) {
    let popup = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .border_style(Style::default().fg(theme::PRIMARY));
    frame.render_widget(
        Paragraph::new(content.to_string())
            .wrap(Wrap { trim: false })
            .block(block),
        popup,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
