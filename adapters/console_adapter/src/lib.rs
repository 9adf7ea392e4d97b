use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};
use todo_core::domain::Todo;
use todo_core::ports::TodoPresenter;

/// Plain-text presenter: id, title and completed flag, one per line
pub struct LinesTodoPresenter<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> LinesTodoPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> TodoPresenter for LinesTodoPresenter<W> {
    fn present(&self, todo: &Todo) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{}", todo.id)?;
        writeln!(out, "{}", todo.title)?;
        writeln!(out, "{}", todo.completed)?;
        out.flush()
    }
}

/// JSON presenter: one compact object per line
pub struct JsonTodoPresenter<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonTodoPresenter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> TodoPresenter for JsonTodoPresenter<W> {
    fn present(&self, todo: &Todo) -> io::Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        serde_json::to_writer(&mut *out, todo)?;
        writeln!(out)?;
        out.flush()
    }
}
