mod site;

use std::fs::File;
use std::time::Duration;

use folio::prelude::*;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

fn load_config() -> Result<SiteConfig, ConfigError> {
    match std::env::args().nth(1) {
        Some(path) => SiteConfig::from_file(path),
        None => Ok(SiteConfig::default()),
    }
}

/// Events a visitor might produce, with pauses in between.
fn script() -> Vec<(Duration, Event)> {
    let ms = Duration::from_millis;
    vec![
        (ms(0), Event::click("nextBtn")),
        (ms(300), Event::click("sliderDots-2")),
        (ms(300), Event::pointer_enter("app-slider")),
        (ms(2000), Event::pointer_leave("app-slider")),
        (ms(500), Event::Scroll { y: 600.0 }),
        (ms(500), Event::Scroll { y: 1400.0 }),
        (ms(500), Event::click("hamburger")),
        (ms(200), Event::click("nav-work")),
        (ms(5200), Event::Scroll { y: 900.0 }),
        (ms(100), Event::submit("contact-form")),
        (
            ms(100),
            Event::Resize {
                width: 700.0,
                height: 900.0,
            },
        ),
    ]
}

async fn run(config: SiteConfig) {
    let document = SharedDocument::new(site::portfolio());
    let notifier = Notifier::new(document.clone(), config.toast.clone());

    let slider = Slider::initialize(&document, config.slider.clone());
    let progress = ProgressBar::install(&document);

    let mut page = Page::new(document.clone());
    page.mount_opt(slider.clone())
        .mount_opt(Header::install(&document, NavIds::default()).map(|h| h.hide_on_scroll(true)))
        .mount(progress.clone())
        .mount(Reveal::install(&document, &config.reveal))
        .mount(Counters::install(&document, "stat-number"))
        .mount_opt(ContactForm::install(&document, "contact-form", notifier.clone()));
    info!("page ready with {} behaviors", page.len());

    for (pause, event) in script() {
        tokio::time::sleep(pause).await;
        let handled = page.dispatch(event.clone());
        info!("{event:?} handled={handled}");
    }

    match &slider {
        Some(slider) => {
            let layout = slider.layout();
            println!(
                "slider: page {}/{} ({} per view, {} slides)",
                slider.current_page() + 1,
                slider.total_pages(),
                slider.slides_per_view(),
                slider.slide_count(),
            );
            println!(
                "  offset {}px, prev {}, next {}, autoplay {}",
                layout.offset_px,
                if layout.prev_disabled { "disabled" } else { "enabled" },
                if layout.next_disabled { "disabled" } else { "enabled" },
                if slider.is_autoplay_running() { "running" } else { "stopped" },
            );
        }
        None => println!("no slider on this page"),
    }
    println!("scroll progress: {:.0}%", progress.progress());
    println!("toasts on screen: {}", notifier.visible().len());
}

#[tokio::main]
async fn main() {
    match File::create("folio-demo.log") {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Failed to initialize logger: {e}");
            }
        }
        Err(e) => eprintln!("Failed to create log file: {e}"),
    }

    match load_config() {
        Ok(config) => run(config).await,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
