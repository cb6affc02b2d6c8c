use std::io::stdout;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use ratatui::DefaultTerminal;

use glyphtip::TipEngine;
use glyphtip::catalog::{API_BASE, CatalogResponse, CatalogWorker};
use glyphtip::host::DeviceClass;
use glyphtip::messages::{Messages, Variant};
use glyphtip::settings::FileStore;
use glyphtip::tui::{
    DialogOutcome, DialogRequest, HitRegion, SettingsDialog, TuiPage, cell_placement,
    pointer_events, render,
};
use glyphtip::webfont::WebfontInjector;

/// Terminal demo of the rare-character tooltip gadget
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Simulate a touch-only device (tap to toggle tooltips)
    #[arg(long)]
    touch: bool,

    /// UI language variant
    #[arg(long, default_value = "zh-hans")]
    lang: String,

    /// Base URL of the font catalog service
    #[arg(long, default_value = API_BASE)]
    api_base: String,
}

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    // Logging goes to stderr and is only useful when redirected
    #[cfg(debug_assertions)]
    let _ = env_logger::try_init();

    let args = Args::parse();

    // Initialize terminal (raw mode, alternate screen) plus mouse capture
    let terminal = ratatui::init();
    execute!(stdout(), EnableMouseCapture)?;

    let result = run(terminal, args);

    let _ = execute!(stdout(), DisableMouseCapture);
    ratatui::restore();

    result
}

fn run(mut terminal: DefaultTerminal, args: Args) -> Result<()> {
    let device = if args.touch {
        DeviceClass::Touch
    } else {
        DeviceClass::Pointer
    };
    let messages = Messages::new(Variant::from_locale(&args.lang));

    let (presenter, dialog_requests) = DialogRequest::new();
    let mut engine = TipEngine::new(
        TuiPage::demo(),
        device,
        Box::new(FileStore::new()),
        Box::new(presenter),
        messages,
    )
    .with_placement(cell_placement())
    .with_webfont(WebfontInjector::with_base(&args.api_base));
    engine.init();

    let worker = CatalogWorker::spawn(args.api_base.clone());
    let mut dialog: Option<SettingsDialog> = None;
    let mut fonts = None;
    let mut hover = HitRegion::Outside;

    loop {
        let now = Instant::now();
        engine.tick(now);
        engine.host_mut().notification.expire(now);

        // Dialog open request queued by the engine's presenter call
        if let Some(current) = dialog_requests.borrow_mut().take() {
            let mut opened = SettingsDialog::open(&current, fonts.as_deref());
            // Webfonts already on but the catalog was never fetched: start
            // the fetch right away so the font list fills itself in
            if current.use_webfont && fonts.is_none() {
                opened.state.begin_fonts_load();
                worker.request_list();
            }
            dialog = Some(opened);
        }

        // Font list responses from the catalog worker
        if let Some(CatalogResponse::List(result)) = worker.try_recv() {
            if let Ok(list) = &result {
                fonts = Some(list.clone());
                engine.note_fonts(list);
            }
            if let Some(dialog) = dialog.as_mut() {
                dialog.state.fonts_loaded(result);
            }
        }

        let size = terminal.size()?;
        engine
            .host_mut()
            .set_area(ratatui::layout::Rect::new(0, 0, size.width, size.height));
        let messages = *engine.messages();
        terminal.draw(|frame| {
            render::draw(frame, engine.host(), dialog.as_ref(), &messages, device);
        })?;

        // Sleep until the next timer deadline, capped so notifications and
        // worker responses stay fresh
        let timeout = engine
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_millis(250))
            .min(Duration::from_millis(250));

        if !event::poll(timeout)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(open) = dialog.as_mut() {
                    match open.handle_key(key) {
                        DialogOutcome::FetchFonts => {
                            open.state.begin_fonts_load();
                            worker.request_list();
                        }
                        DialogOutcome::Saved(new) => {
                            engine.apply_settings(new);
                            dialog = None;
                        }
                        DialogOutcome::Closed => dialog = None,
                        DialogOutcome::None => {}
                    }
                } else if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    break;
                }
            }
            Event::Mouse(mouse) => {
                if dialog.is_none() {
                    for pointer_event in
                        pointer_events(engine.host(), &mut hover, mouse, device)
                    {
                        engine.handle_event(pointer_event, Instant::now());
                    }
                }
            }
            _ => {}
        }
    }

    engine.teardown();
    Ok(())
}
