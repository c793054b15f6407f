#![allow(dead_code)]
use spirograph::{Color, DrawingSink, Point, SpiroError, Timer};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MoveTo(Point),
    LineTo(Point),
    PenUp,
    PenDown,
    SetColor(Color),
    ShowCursor,
    HideCursor,
    Clear,
}

/*
 * Records every call, the log is shared so the test keeps a handle on it
 * once the sink is moved into an instance.
 */
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub log: Rc<RefCell<Vec<Command>>>,
    pub broken: Rc<RefCell<bool>>,
}

impl RecordingSink {
    pub fn new() -> RecordingSink {
        RecordingSink::default()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.log.borrow().clone()
    }

    pub fn forget(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn break_down(&self) {
        *self.broken.borrow_mut() = true;
    }

    fn record(&mut self, command: Command) -> Result<(), SpiroError> {
        if *self.broken.borrow() {
            return Err(SpiroError::SinkFailure("viewport destroyed"));
        }
        self.log.borrow_mut().push(command);
        Ok(())
    }
}

impl DrawingSink for RecordingSink {
    fn move_to(&mut self, point: Point) -> Result<(), SpiroError> {
        self.record(Command::MoveTo(point))
    }

    fn line_to(&mut self, point: Point) -> Result<(), SpiroError> {
        self.record(Command::LineTo(point))
    }

    fn pen_up(&mut self) -> Result<(), SpiroError> {
        self.record(Command::PenUp)
    }

    fn pen_down(&mut self) -> Result<(), SpiroError> {
        self.record(Command::PenDown)
    }

    fn set_color(&mut self, color: Color) -> Result<(), SpiroError> {
        self.record(Command::SetColor(color))
    }

    fn show_cursor(&mut self) -> Result<(), SpiroError> {
        self.record(Command::ShowCursor)
    }

    fn hide_cursor(&mut self) -> Result<(), SpiroError> {
        self.record(Command::HideCursor)
    }

    fn clear(&mut self) -> Result<(), SpiroError> {
        self.record(Command::Clear)
    }
}

/// Counts the re-arms, can be told to refuse them.
#[derive(Debug, Default)]
pub struct ManualTimer {
    pub armed: Vec<Duration>,
    pub refuse: bool,
}

impl ManualTimer {
    pub fn new() -> ManualTimer {
        ManualTimer::default()
    }
}

impl Timer for ManualTimer {
    fn schedule_once(&mut self, delay: Duration) -> Result<(), SpiroError> {
        if self.refuse {
            return Err(SpiroError::TimerRearm("timer refused"));
        }
        self.armed.push(delay);
        Ok(())
    }
}
