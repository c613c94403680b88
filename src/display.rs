use std::io::{Result, Write, stdout};

use crossterm::{
    ExecutableCommand,
    cursor::MoveTo,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};

use crate::map::Map;
use crate::robot::Robot;
use crate::types::{Point, TileType};

pub struct Display;

impl Display {
    pub fn render(map: &Map, robot: &Robot) -> Result<()> {
        let mut stdout = stdout();

        stdout.execute(Clear(ClearType::All))?;

        for row in 0..map.rows {
            stdout.execute(MoveTo(0, row as u16))?;
            for column in 0..map.columns {
                match map.tile_at(Point::new(column, row)) {
                    TileType::Empty => {
                        stdout.execute(SetForegroundColor(Color::DarkGrey))?;
                        print!(".");
                    }
                    TileType::Dirt => {
                        stdout.execute(SetForegroundColor(Color::Yellow))?;
                        print!("*");
                    }
                    TileType::DifficultDirt => {
                        stdout.execute(SetForegroundColor(Color::Red))?;
                        print!("!");
                    }
                    TileType::Obstacle => {
                        stdout.execute(SetForegroundColor(Color::Black))?;
                        stdout.execute(SetBackgroundColor(Color::DarkGrey))?;
                        print!("#");
                    }
                    TileType::Base => {
                        stdout.execute(SetForegroundColor(Color::Cyan))?;
                        print!("B");
                    }
                    TileType::Cleaned => {
                        stdout.execute(SetForegroundColor(Color::Green))?;
                        print!("O");
                    }
                }
                stdout.execute(ResetColor)?;
            }
        }

        stdout.execute(MoveTo(0, map.rows as u16 + 1))?;
        print!(
            "Obstacles: {} | Dirt: {} | Battery: {:.1}",
            map.obstacle_count, map.dirt_count, robot.battery
        );
        stdout.execute(MoveTo(0, map.rows as u16 + 2))?;
        print!(
            "Cleaned: {} | Blocked attempts: {} | Position: ({})",
            robot.cleaned_cells,
            robot.blocked_attempts,
            robot.position()
        );

        stdout.flush()?;
        Ok(())
    }
}

fn colored_line(color: Color, message: &str) -> Result<()> {
    let mut stdout = stdout();
    stdout.execute(SetForegroundColor(color))?;
    stdout.execute(Print(message))?;
    stdout.execute(ResetColor)?;
    stdout.execute(Print("\n"))?;
    Ok(())
}

pub fn log_error(message: &str) {
    let _ = colored_line(Color::Red, message);
}

pub fn log_warn(message: &str) {
    let _ = colored_line(Color::Yellow, message);
}

pub fn log_info(message: &str) {
    let _ = colored_line(Color::Blue, message);
}
