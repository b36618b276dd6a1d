#[derive(Debug)]
pub enum Request {
    PlayerReq(protocol::PlayerRequest),
    /// One second passed on the ticker started for `epoch`.
    Tick(u64),
    Close,
}
