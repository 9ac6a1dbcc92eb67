use std::{env, path::PathBuf};

use anyhow::Result;
use clap::{ArgGroup, Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use log::info;
use nbodyviz::{
    animation::Style,
    energy::{self, EnergyPlot},
    export::{self, ExportFormat},
    format,
};
use ratatui::{
    layout::Alignment,
    style::{Color, Style as TextStyle},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, LegendPosition},
    DefaultTerminal, Frame,
};

#[derive(Parser, Debug)]
#[command(version, about = "Create animation from nbody output.", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[arg(long, default_value = "nbodyviz::(.*)", value_name = "REGEX")]
    trace_filter: String,

    #[arg(
        long,
        default_value = "INFO",
        value_name = "TRACE|DEBUG|INFO|WARN|ERROR"
    )]
    trace_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Animate positions
    Pos(PosArgs),
    /// Plot energy
    Energy(EnergyArgs),
}

#[derive(clap::Args, Debug)]
#[command(group(ArgGroup::new("style").required(true).args(["galaxy", "general"])))]
#[command(group(ArgGroup::new("output").required(true).args(["mp4", "gif"])))]
struct PosArgs {
    /// Select galaxy animation.
    #[arg(long)]
    galaxy: bool,

    /// Try animate position file.
    #[arg(long)]
    general: bool,

    /// Save as mp4 file.
    #[arg(long)]
    mp4: bool,

    /// Save as gif file.
    #[arg(long)]
    gif: bool,

    #[arg(short, long, default_value = format::positions::DEFAULT_FILE)]
    file: PathBuf,

    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,
}

#[derive(clap::Args, Debug)]
struct EnergyArgs {
    #[arg(short, long, default_value = format::energy::DEFAULT_FILE)]
    file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env::set_var("RUST_LOG", args.trace_level);
    common::trace::init(Some(args.trace_filter));

    match args.command {
        Some(Command::Pos(pos)) => animate(pos),
        Some(Command::Energy(energy)) => plot_energy(energy),
        None => {
            println!("No plot selected");
            Ok(())
        }
    }
}

fn animate(args: PosArgs) -> Result<()> {
    let style = if args.galaxy {
        Style::Galaxy
    } else {
        Style::General
    };
    let output = if args.mp4 {
        ExportFormat::Mp4
    } else {
        ExportFormat::Gif
    };

    let positions = format::read_positions(&args.file)?;
    let animation = style.animate(&positions)?;
    let path = export::save_animation(&animation, output, &args.output_dir)?;
    info!("Saved {}", path.display());
    Ok(())
}

fn plot_energy(args: EnergyArgs) -> Result<()> {
    let energy = format::read_energy(&args.file)?;
    let plot = EnergyPlot::from_energy(&energy)?;

    let terminal = ratatui::init();
    let app_result = EnergyApp::new(plot).run(terminal);
    ratatui::restore();
    app_result
}

struct EnergyApp {
    plot: EnergyPlot,
    should_quit: bool,
}

impl EnergyApp {
    const COLORS: [Color; 3] = [Color::Red, Color::Blue, Color::Green];

    fn new(plot: EnergyPlot) -> Self {
        Self {
            plot,
            should_quit: false,
        }
    }

    fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_event(&event::read()?);
        }
        Ok(())
    }

    fn draw(&self, f: &mut Frame) {
        let datasets = self
            .plot
            .curves
            .iter()
            .zip(Self::COLORS)
            .map(|(curve, color)| {
                Dataset::default()
                    .name(curve.label)
                    .marker(symbols::Marker::Braille)
                    .graph_type(GraphType::Line)
                    .style(TextStyle::default().fg(color))
                    .data(&curve.points)
            })
            .collect::<Vec<_>>();

        let [x_min, x_max] = self.plot.x_bounds;
        let [y_min, y_max] = padded(self.plot.y_bounds);

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(energy::TITLE)
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL),
            )
            .x_axis(
                Axis::default()
                    .title(energy::X_LABEL)
                    .style(TextStyle::default().fg(Color::Gray))
                    .bounds([x_min, x_max.max(x_min + 1.)])
                    .labels([
                        Span::raw(format!("{:.0}", x_min)),
                        Span::raw(format!("{:.0}", x_max)),
                    ]),
            )
            .y_axis(
                Axis::default()
                    .title(energy::Y_LABEL)
                    .style(TextStyle::default().fg(Color::Gray))
                    .bounds([y_min, y_max])
                    .labels([
                        Span::raw(format!("{:.3e}", y_min)),
                        Span::raw(format!("{:.3e}", (y_min + y_max) / 2.)),
                        Span::raw(format!("{:.3e}", y_max)),
                    ]),
            )
            .legend_position(Some(LegendPosition::TopRight));

        f.render_widget(chart, f.area());
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::Key(key_event) = event {
            if key_event.kind != KeyEventKind::Press {
                return;
            }
            match key_event.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.should_quit = true;
                }
                _ => {}
            }
        }
    }
}

/// Adds a 5% margin so the curves do not touch the frame.
fn padded([min, max]: [f64; 2]) -> [f64; 2] {
    let margin = if max > min { (max - min) * 0.05 } else { 0.5 };
    [min - margin, max + margin]
}
