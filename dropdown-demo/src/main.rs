use std::fs::File;

use crossterm::event::{Event as CtEvent, KeyCode, KeyEventKind};
use dropdown::Host;
use simplelog::{Config, LevelFilter, WriteLogger};

mod page;
mod terminal;
mod view;

use terminal::Terminal;
use view::View;

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "dropdown-demo.log".to_string());
    let log_file = File::create(&log_path)?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .map_err(std::io::Error::other)?;

    let mut host = Host::new(page::build());
    attach_all(&mut host);

    let mut term = Terminal::new()?;
    let mut view = View::default();

    loop {
        let rows = view::rows(host.document());
        term.render(&view.lines(&host, &rows))?;

        for event in term.poll(None)? {
            let CtEvent::Key(key_event) = event else {
                continue;
            };
            if key_event.kind != KeyEventKind::Press {
                continue;
            }

            let selected = view.selected_node(&rows);
            match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Up => view.select_prev(),
                KeyCode::Down => view.select_next(&rows),
                KeyCode::Enter => {
                    if let Some(node) = selected {
                        let report = host.click(node);
                        view.report("click", report);
                    }
                }
                KeyCode::Char('o') => {
                    if let Some(node) = selected {
                        let report = host.pointer_over(node);
                        view.report("pointer over", report);
                    }
                }
                KeyCode::Char('l') => {
                    if let Some(node) = selected {
                        let report = host.pointer_leave(node);
                        view.report("pointer leave", report);
                    }
                }
                KeyCode::Char('d') => {
                    if let Some(widget) = selected.and_then(|node| host.widget_at(node)) {
                        host.detach(widget);
                        view.status = format!("detached {widget}");
                    }
                }
                KeyCode::Char('a') => {
                    let attached = attach_all(&mut host);
                    view.status = format!(
                        "attached {attached} widget(s), {} live",
                        host.widget_ids().len()
                    );
                }
                _ => {}
            }
        }
    }
}

/// Attach every unattached widget, logging failures. Returns how many
/// attached.
fn attach_all(host: &mut Host) -> usize {
    let mut attached = 0;
    for result in host.attach_all() {
        match result {
            Ok(a) => {
                attached += 1;
                for diagnostic in &a.diagnostics {
                    log::info!("{}: {diagnostic}", a.widget);
                }
            }
            Err(err) => log::error!("attach failed: {err}"),
        }
    }
    attached
}
