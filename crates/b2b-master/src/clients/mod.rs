mod ydaemon;

pub use ydaemon::YDaemonClient;
