pub const COIN: i64 = 100_000_000;

pub const NETWORK_KEY_MAIN: &str = "main";
pub const NETWORK_KEY_TEST: &str = "test";
pub const NETWORK_KEY_REGTEST: &str = "regtest";

/// Main and test share their wire magic; they are told apart by port and
/// genesis.
pub const MAIN_MESSAGE_START: [u8; 4] = [0x70, 0x35, 0x22, 0x05];
pub const REGTEST_MESSAGE_START: [u8; 4] = [0xfa, 0xbf, 0xb5, 0xda];

pub const MAIN_PORT: u16 = 9697;
pub const TEST_PORT: u16 = 19697;
pub const REGTEST_PORT: u16 = 29697;
