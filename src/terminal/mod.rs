mod draw;
mod pacer;
mod session;

pub use draw::TerminalRenderer;
pub use pacer::KeyboardPacer;
pub use session::TerminalSession;
