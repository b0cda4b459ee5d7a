pub type CmdResult<T> = docroute::Result<(T, i32)>;

pub mod rewrite;
