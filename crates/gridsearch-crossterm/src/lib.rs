//! Crossterm renderer for gridsearch.
//!
//! Provides a [`TerminalSink`] that implements
//! [`gridsearch_paths::StepSink`], drawing every search step to the
//! terminal through crossterm. Each grid cell is two columns wide; only the
//! cells whose tile changed since the previous step are redrawn.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::{error, info};

use gridsearch_core::{Color, Frame, FrameCache, Grid, Palette};
use gridsearch_paths::{Abort, Algorithm, SearchReport, Step, StepSink};

/// Glyph drawn on Start and End.
const MARKER: char = '●';

/// Maps a [`gridsearch_core::Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// Whether a key press asks to quit: `q`, `Esc` or `Ctrl-C`.
pub fn is_quit_key(key: &KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// How long to pause after each kind of step.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pacing {
    /// After every visited cell.
    pub search: Duration,
    /// After every painted path cell.
    pub path: Duration,
}

impl Pacing {
    /// Pacing for `algorithm` with a `frame` delay per step.
    ///
    /// Dijkstra sweeps the whole grid, so its search phase is not delayed;
    /// only its path is drawn at the frame rate.
    pub fn for_algorithm(algorithm: Algorithm, frame: Duration) -> Self {
        let search = match algorithm {
            Algorithm::Dijkstra => Duration::ZERO,
            _ => frame,
        };
        Self {
            search,
            path: frame,
        }
    }

    fn after(&self, step: Step) -> Duration {
        match step {
            Step::Visit(_) => self.search,
            Step::Path(_) => self.path,
        }
    }
}

impl Default for Pacing {
    fn default() -> Self {
        let frame = Duration::from_millis(50);
        Self {
            search: frame,
            path: frame,
        }
    }
}

/// A step sink that renders the grid in a terminal.
///
/// Call [`init`](Self::init) before the first run and
/// [`close`](Self::close) when done. While pacing, the sink polls the
/// keyboard and aborts the running search on a quit key.
pub struct TerminalSink<W: Write = Stdout> {
    out: W,
    palette: Palette,
    pacing: Pacing,
    cache: FrameCache,
    title: &'static str,
    poll_input: bool,
    active: bool,
}

impl TerminalSink<Stdout> {
    /// Create a sink drawing to standard output.
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalSink<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalSink<W> {
    /// Create a sink drawing to `out`. Keyboard polling is enabled.
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            palette: Palette::default(),
            pacing: Pacing::default(),
            cache: FrameCache::new(),
            title: "",
            poll_input: true,
            active: false,
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Configure whether the keyboard is polled while pacing.
    pub fn with_input(mut self, enabled: bool) -> Self {
        self.poll_input = enabled;
        self
    }

    pub fn pacing(&self) -> Pacing {
        self.pacing
    }

    pub fn set_pacing(&mut self, pacing: Pacing) {
        self.pacing = pacing;
    }

    /// The wrapped writer.
    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        queue!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        self.out.flush()?;
        self.active = true;
        self.cache.invalidate();
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        let _ = queue!(
            self.out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = self.out.flush();
        let _ = terminal::disable_raw_mode();
        self.active = false;
    }

    /// Prepare for a run of `algorithm`: set the title, the default pacing
    /// for that algorithm and redraw everything on the next step.
    pub fn begin(&mut self, algorithm: Algorithm, frame: Duration) -> io::Result<()> {
        self.title = algorithm.name();
        self.pacing = Pacing::for_algorithm(algorithm, frame);
        self.cache.invalidate();
        queue!(
            self.out,
            terminal::SetTitle(self.title),
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0),
            ResetColor,
            Print(self.title)
        )?;
        self.out.flush()
    }

    /// Draw the cells of `grid` that changed since the last draw.
    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        let frame = self.cache.compute_frame(grid);
        self.flush_frame(&frame)
    }

    fn flush_frame(&mut self, frame: &Frame) -> io::Result<()> {
        if frame.is_empty() {
            return Ok(());
        }
        for fc in &frame.cells {
            let p = fc.pos;
            // Row 0 holds the title.
            queue!(
                self.out,
                cursor::MoveTo((p.col * 2) as u16, (p.row + 1) as u16),
                SetBackgroundColor(to_ct_color(self.palette.background(fc.tile.paint)))
            )?;
            match self.palette.marker(fc.tile.role) {
                Some(marker) => queue!(
                    self.out,
                    SetForegroundColor(to_ct_color(marker)),
                    Print(MARKER),
                    Print(' ')
                )?,
                None => queue!(self.out, Print("  "))?,
            }
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Print the result of `report` below the grid.
    pub fn show_status(&mut self, grid: &Grid, report: &SearchReport) -> io::Result<()> {
        self.draw(grid)?;
        let line = match report.path_len() {
            Some(len) => format!(
                "{}: {} ({len} steps, {} cells visited)",
                report.algorithm,
                report.summary(),
                report.visit_order.len()
            ),
            None => format!(
                "{}: {} ({} cells visited)",
                report.algorithm,
                report.summary(),
                report.visit_order.len()
            ),
        };
        queue!(
            self.out,
            cursor::MoveTo(0, (grid.rows() + 1) as u16),
            ResetColor,
            terminal::Clear(ClearType::CurrentLine),
            Print(line)
        )?;
        self.out.flush()
    }

    /// Block until a key is pressed or `timeout` elapses. Returns `false` if
    /// the key was a quit key.
    pub fn wait_for_key(&mut self, timeout: Option<Duration>) -> io::Result<bool> {
        let deadline = timeout.map(|t| Instant::now() + t);
        loop {
            let wait = match deadline {
                Some(d) => d.saturating_duration_since(Instant::now()),
                None => Duration::from_millis(250),
            };
            if deadline.is_some() && wait.is_zero() {
                return Ok(true);
            }
            if event::poll(wait)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Release {
                        return Ok(!is_quit_key(&key));
                    }
                }
            }
        }
    }

    /// Sleep for `dur`, watching the keyboard if enabled. Returns `true`
    /// if a quit key was pressed.
    fn pause(&mut self, dur: Duration) -> io::Result<bool> {
        if !self.poll_input {
            if !dur.is_zero() {
                std::thread::sleep(dur);
            }
            return Ok(false);
        }
        let deadline = Instant::now() + dur;
        loop {
            let wait = deadline.saturating_duration_since(Instant::now());
            if !event::poll(wait)? {
                return Ok(false);
            }
            if let Event::Key(key) = event::read()? {
                if is_quit_key(&key) {
                    return Ok(true);
                }
            }
            if wait.is_zero() {
                return Ok(false);
            }
        }
    }
}

impl<W: Write> StepSink for TerminalSink<W> {
    fn on_step(&mut self, grid: &Grid, step: Step) -> Result<(), Abort> {
        if let Err(e) = self.draw(grid) {
            error!("terminal draw failed: {e}");
            return Err(Abort);
        }
        match self.pause(self.pacing.after(step)) {
            Ok(false) => Ok(()),
            Ok(true) => {
                info!("{}: quit requested", self.title);
                Err(Abort)
            }
            Err(e) => {
                error!("terminal input failed: {e}");
                Err(Abort)
            }
        }
    }
}

impl<W: Write> Drop for TerminalSink<W> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridsearch_core::Pos;

    fn sink() -> TerminalSink<Vec<u8>> {
        let mut s = TerminalSink::with_writer(Vec::new()).with_input(false);
        s.set_pacing(Pacing {
            search: Duration::ZERO,
            path: Duration::ZERO,
        });
        s
    }

    #[test]
    fn quit_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(is_quit_key(&q));
        assert!(is_quit_key(&esc));
        assert!(is_quit_key(&ctrl_c));
        assert!(!is_quit_key(&c));
    }

    #[test]
    fn dijkstra_searches_without_delay() {
        let frame = Duration::from_millis(50);
        let p = Pacing::for_algorithm(Algorithm::Dijkstra, frame);
        assert_eq!(p.after(Step::Visit(Pos::ZERO)), Duration::ZERO);
        assert_eq!(p.after(Step::Path(Pos::ZERO)), frame);
        let p = Pacing::for_algorithm(Algorithm::Bfs, frame);
        assert_eq!(p.after(Step::Visit(Pos::ZERO)), frame);
    }

    #[test]
    fn redraws_only_changed_cells() {
        let mut g = Grid::from_layout("S..\n..E").unwrap();
        let mut s = sink();
        s.on_step(&g, Step::Visit(Pos::ZERO)).unwrap();
        let full = s.writer().len();
        assert!(full > 0);

        s.on_step(&g, Step::Visit(Pos::ZERO)).unwrap();
        assert_eq!(s.writer().len(), full);

        let i = g.index(Pos::new(0, 1)).unwrap();
        g.cell_at_mut(i).visit();
        s.on_step(&g, Step::Visit(Pos::new(0, 1))).unwrap();
        let grown = s.writer().len() - full;
        assert!(grown > 0 && grown < full);
    }

    #[test]
    fn markers_are_drawn_on_endpoints() {
        let g = Grid::from_layout("S.E").unwrap();
        let mut s = sink();
        s.draw(&g).unwrap();
        let out = String::from_utf8(s.writer().clone()).unwrap();
        assert_eq!(out.matches(MARKER).count(), 2);
    }

    #[test]
    fn status_line_reports_outcome() {
        let mut g = Grid::from_layout("S#\n#E").unwrap();
        let mut s = sink();
        let r = gridsearch_paths::run_bfs(&mut g, &mut s).unwrap();
        s.show_status(&g, &r).unwrap();
        let out = String::from_utf8(s.writer().clone()).unwrap();
        assert!(out.contains("No path could be found!!"));
    }
}
