//! Ref Drill entry point
//!
//! In the browser this wires the page's buttons to a `TrainingSession` and
//! renders its board. Natively it runs a timed drill in the terminal.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_drill {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlElement, HtmlInputElement, MouseEvent};

    use ref_drill::drill::{ArrowGroup, Category, Direction, TeamColor, TrainingSession};
    use ref_drill::settings::parse_interval_input;

    /// Page state shared by all DOM callbacks
    struct App {
        session: TrainingSession,
        /// Live `setInterval` id and its callback while the timer runs
        interval: Option<(i32, Closure<dyn FnMut()>)>,
    }

    impl App {
        fn new(seed: u64) -> Self {
            Self {
                session: TrainingSession::new(seed),
                interval: None,
            }
        }
    }

    fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    fn arrow_ids(group: ArrowGroup) -> (&'static str, &'static str) {
        match group {
            ArrowGroup::Foul => ("leftArrow", "rightArrow"),
            ArrowGroup::Violation => ("violationLeftArrow", "violationRightArrow"),
            ArrowGroup::OutOfBounds => ("oobLeftArrow", "oobRightArrow"),
        }
    }

    fn set_class(el: &Element, class: &str, on: bool) {
        let _ = el.class_list().toggle_with_force(class, on);
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_html(document: &Document, id: &str, html: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_inner_html(html);
        }
    }

    fn paint_swatch(document: &Document, id: &str, color: TeamColor) {
        let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        else {
            return;
        };
        let style = el.style();
        let _ = style.set_property("background-color", color.as_str());
        let _ = style.set_property("color", color.contrast_label());
    }

    /// Push session state into the DOM
    fn render(app: &App) {
        let Some(document) = document() else { return };
        let session = &app.session;
        let board = session.board();

        for category in Category::ALL {
            let active = category == session.category();
            if let Some(section) = document.get_element_by_id(&format!("{}Training", category.as_str())) {
                set_class(&section, "hidden", !active);
            }
            if let Some(btn) = document.get_element_by_id(&format!("{}Btn", category.as_str())) {
                set_class(&btn, "active", active);
            }
        }

        set_text(
            &document,
            "numberDisplay",
            board.number.as_ref().map(|p| p.number.as_str()).unwrap_or(""),
        );
        set_text(
            &document,
            "violationDisplay",
            board.violation.as_ref().map(|p| p.violation).unwrap_or(""),
        );

        let foul_html = board
            .foul
            .as_ref()
            .map(|foul| {
                format!(
                    r#"<div class="player-info">{}</div><div class="foul-info"><div class="foul-name">{}</div><div class="foul-details">{}</div></div>"#,
                    foul.player_label(),
                    foul.foul_name,
                    foul.consequence.unwrap_or(""),
                )
            })
            .unwrap_or_default();
        set_html(&document, "foulDisplay", &foul_html);

        let oob_html = board
            .out_of_bounds
            .as_ref()
            .map(|oob| {
                format!(
                    r#"<div class="oob-info"><div class="oob-last-touch">Last Touch: <span class="last-touch-team">{}</span></div></div>"#,
                    oob.last_touch.as_str().to_uppercase(),
                )
            })
            .unwrap_or_default();
        set_html(&document, "outOfBoundsDisplay", &oob_html);

        for group in ArrowGroup::ALL {
            let current = session.directions().current(group);
            let (left_id, right_id) = arrow_ids(group);
            if let Some(left) = document.get_element_by_id(left_id) {
                set_class(&left, "active", current == Some(Direction::Left));
            }
            if let Some(right) = document.get_element_by_id(right_id) {
                set_class(&right, "active", current == Some(Direction::Right));
            }
        }

        let colors = session.team_colors();
        paint_swatch(&document, "teamA", colors.team_a);
        paint_swatch(&document, "teamB", colors.team_b);

        let running = session.timer().is_running();
        set_text(&document, "timerStatus", if running { "ON" } else { "OFF" });
        if let Some(btn) = document.get_element_by_id("startTimer") {
            set_disabled(&btn, running);
        }
        if let Some(btn) = document.get_element_by_id("stopTimer") {
            set_disabled(&btn, !running);
        }
    }

    fn set_disabled(el: &Element, disabled: bool) {
        if disabled {
            let _ = el.set_attribute("disabled", "");
        } else {
            let _ = el.remove_attribute("disabled");
        }
    }

    fn alert(message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn start_timer(app: &Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let raw = document()
            .and_then(|d| d.get_element_by_id("timerInterval"))
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default();

        let interval_ms = match parse_interval_input(&raw) {
            Ok(ms) => ms,
            Err(e) => {
                log::warn!("Interval input {raw:?} rejected");
                alert(&e.to_string());
                return;
            }
        };

        let started = app
            .borrow_mut()
            .session
            .start_timer(interval_ms as i64, js_sys::Date::now() as u64);
        let handle = match started {
            Ok(Some(handle)) => handle,
            Ok(None) => return,
            Err(e) => {
                alert(&e.to_string());
                return;
            }
        };
        render(&app.borrow());

        let tick_app = app.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let mut a = tick_app.borrow_mut();
            if a.session.fire_tick(handle).is_some() {
                render(&a);
            }
        });
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        ) {
            Ok(id) => app.borrow_mut().interval = Some((id, closure)),
            Err(e) => {
                log::error!("setInterval failed: {e:?}");
                let mut a = app.borrow_mut();
                a.session.stop_timer();
                render(&a);
            }
        }
    }

    fn stop_timer(app: &Rc<RefCell<App>>) {
        let mut a = app.borrow_mut();
        a.session.stop_timer();
        if let Some((id, _callback)) = a.interval.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(id);
            }
        }
        render(&a);
    }

    fn on_click<F>(document: &Document, id: &str, app: &Rc<RefCell<App>>, action: F)
    where
        F: Fn(&Rc<RefCell<App>>) + 'static,
    {
        let Some(el) = document.get_element_by_id(id) else {
            log::warn!("No #{id} on the page");
            return;
        };
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| action(&app));
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_mode_buttons(document: &Document, app: &Rc<RefCell<App>>) {
        for category in Category::ALL {
            on_click(document, &format!("{}Btn", category.as_str()), app, move |app| {
                let mut a = app.borrow_mut();
                a.session.select_category(category);
                render(&a);
            });
        }
    }

    fn setup_generate_buttons(document: &Document, app: &Rc<RefCell<App>>) {
        let buttons = [
            ("generateNumber", Category::Numbers),
            ("generateViolation", Category::Violations),
            ("generateFoul", Category::Fouls),
            ("generateOutOfBounds", Category::OutOfBounds),
        ];
        for (id, category) in buttons {
            on_click(document, id, app, move |app| {
                let mut a = app.borrow_mut();
                a.session.generate(category);
                render(&a);
            });
        }
    }

    fn setup_arrows(document: &Document, app: &Rc<RefCell<App>>) {
        for group in ArrowGroup::ALL {
            let (left_id, right_id) = arrow_ids(group);
            for (id, direction) in [(left_id, Direction::Left), (right_id, Direction::Right)] {
                on_click(document, id, app, move |app| {
                    let mut a = app.borrow_mut();
                    a.session.set_direction(direction, group);
                    render(&a);
                });
            }
        }
    }

    fn setup_timer_controls(document: &Document, app: &Rc<RefCell<App>>) {
        on_click(document, "startTimer", app, start_timer);
        on_click(document, "stopTimer", app, stop_timer);
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Ref Drill starting...");

        let Some(document) = document() else {
            log::error!("No document");
            return;
        };

        let seed = js_sys::Date::now() as u64;
        let app = Rc::new(RefCell::new(App::new(seed)));
        log::info!("Session seeded with {seed}");

        setup_mode_buttons(&document, &app);
        setup_generate_buttons(&document, &app);
        setup_arrows(&document, &app);
        setup_timer_controls(&document, &app);

        {
            let mut a = app.borrow_mut();
            a.session.select_category(Category::Numbers);
            render(&a);
        }

        log::info!("Ref Drill ready");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_drill::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::PathBuf;
    use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

    use clap::Parser;
    use log::LevelFilter;

    use ref_drill::Settings;
    use ref_drill::drill::{Category, Prompt, TrainingSession};

    /// Granularity of the terminal timer loop
    const POLL_EVERY: Duration = Duration::from_millis(20);

    #[derive(Parser, Debug)]
    #[clap(author, version, about, long_about = None)]
    pub struct Cli {
        #[clap(long, short)]
        /// Drill to run: numbers, violations, fouls or out-of-bounds
        category: Option<String>,

        #[clap(long, short)]
        /// Seconds between prompts (1-60)
        interval: Option<i64>,

        #[clap(long, short = 'n', default_value = "10")]
        /// Number of prompts to show before exiting
        count: u64,

        #[clap(long)]
        /// RNG seed, defaults to the current time
        seed: Option<u64>,

        #[clap(long)]
        /// JSON settings file (interval_secs, start_category)
        config: Option<PathBuf>,

        #[clap(long)]
        /// Print prompts as JSON lines
        json: bool,

        #[clap(long, short, action(clap::ArgAction::Count))]
        /// Increase the log verbosity
        verbose: u8,
    }

    fn print_prompt(prompt: &Prompt, json: bool) -> Result<(), serde_json::Error> {
        if json {
            println!("{}", serde_json::to_string(prompt)?);
        } else {
            println!("{prompt}");
        }
        Ok(())
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        let args = Cli::parse();

        let log_level = match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        env_logger::Builder::new().filter_level(log_level).init();

        let mut settings = match &args.config {
            Some(path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
            None => Settings::default(),
        };
        if let Some(secs) = args.interval {
            settings.interval_secs = secs;
        }
        if let Some(name) = &args.category {
            if Category::from_str(name).is_none() {
                return Err(format!("unknown category {name:?}").into());
            }
            settings.start_category = name.clone();
        }
        let interval_ms = settings.interval_ms()?;

        let seed = args.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis() as u64)
                .unwrap_or_default()
        });
        log::info!("Ref Drill (native) seed {seed}");

        let mut session = TrainingSession::new(seed);
        let category = settings.start_category();
        session.select_category(category);

        if args.count == 0 {
            return Ok(());
        }

        let start = Instant::now();
        let now_ms = || start.elapsed().as_millis() as u64;

        session.start_timer(interval_ms as i64, now_ms())?;
        let mut shown = 0;
        if let Some(prompt) = session.board().current(category) {
            print_prompt(&prompt, args.json)?;
            shown += 1;
        }

        while shown < args.count {
            std::thread::sleep(POLL_EVERY);
            for prompt in session.advance(now_ms()) {
                if shown == args.count {
                    break;
                }
                print_prompt(&prompt, args.json)?;
                shown += 1;
            }
        }

        session.stop_timer();
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    native::run()
}
