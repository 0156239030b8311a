/// 64-bit Steam account identifier.
pub type SteamID = u64;
/// Steam application identifier.
pub type AppID = u32;
