use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use log::info;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

use pacman_mazegen::config::{GlyphSet, Settings, SourceKind};
use pacman_mazegen::{FullMap, GenerationStats, Template};

const CELL_W: usize = 2;
const POLL_MS: u64 = 50;

struct Viewer {
    template: Template,
    source: SourceKind,
    glyphs: GlyphSet,
    attempt: u64,
    map: FullMap,
    stats: GenerationStats,
}

impl Viewer {
    fn new(template: Template, settings: Settings) -> Self {
        let (map, stats) = settings.source.generate(&template, 0);
        Self {
            template,
            source: settings.source,
            glyphs: settings.glyphs,
            attempt: 0,
            map,
            stats,
        }
    }

    fn regenerate(&mut self) {
        self.attempt += 1;
        let (map, stats) = self.source.generate(&self.template, self.attempt);
        info!("attempt {}: {}", self.attempt, stats);
        self.map = map;
        self.stats = stats;
    }
}

fn main() -> io::Result<()> {
    env_logger::init();
    let settings = Settings::from_env();
    info!("mazegen starting with {}", settings.source);

    if settings.print_once {
        let (map, stats) = settings.source.generate(&Template::classic(), 0);
        info!("{stats}");
        print!("{map}");
        return Ok(());
    }

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, settings);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut Stdout, settings: Settings) -> io::Result<()> {
    let mut viewer = Viewer::new(Template::classic(), settings);
    render(stdout, &viewer)?;

    loop {
        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Char('n') | KeyCode::Char('r') => {
                    viewer.regenerate();
                    render(stdout, &viewer)?;
                }
                _ => {}
            },
            Event::Resize(_, _) => render(stdout, &viewer)?,
            _ => {}
        }
    }
}

fn render(stdout: &mut Stdout, viewer: &Viewer) -> io::Result<()> {
    let map = &viewer.map;
    let needed_h = (map.height() + 2) as u16;
    let needed_w = (map.width() * CELL_W) as u16;

    stdout.queue(Clear(ClearType::All))?;
    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;

    let hud = format!(
        "{}  Map: {}  Runs: {}  Blocks: {}  (n next, q quit)",
        viewer.source, viewer.attempt, viewer.stats.runs, viewer.stats.blocks
    );
    stdout.queue(MoveTo(origin_x, origin_y - 1))?;
    stdout.queue(SetForegroundColor(Color::White))?;
    stdout.queue(Print(&hud))?;
    stdout.queue(ResetColor)?;

    let (wall, floor) = viewer.glyphs.glyphs();
    for y in 0..map.height() {
        for x in 0..map.width() {
            let (text, color) = if map.is_wall(x, y) {
                (wall, Color::Blue)
            } else {
                (floor, Color::Reset)
            };
            draw_cell(stdout, origin_x, origin_y, x, y, text, color)?;
        }
    }

    stdout.flush()?;
    Ok(())
}

fn draw_cell(
    stdout: &mut Stdout,
    origin_x: u16,
    origin_y: u16,
    x: usize,
    y: usize,
    text: &str,
    color: Color,
) -> io::Result<()> {
    let x_pos = origin_x + (x * CELL_W) as u16;
    let y_pos = origin_y + y as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}
