pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Name of the deployed contract, echoed by `hello`
pub const CONTRACT_NAME: &str = "LandChain";

// ARC4 return values are logged behind this prefix
// It is the first 4 bytes of SHA-512/256("return")
pub const ABI_RETURN_PREFIX: [u8; 4] = [0x15, 0x1f, 0x7c, 0x75];

// ARC4 method selector size in bytes
pub const ABI_SELECTOR_SIZE: usize = 4;

// Dynamic ARC4 values carry a big-endian u16 length header
pub const ABI_MAX_STRING_SIZE: usize = u16::MAX as usize;

// Global state keys used by the deployed contract
pub const KEY_PARCEL_ID: &str = "tanah_id";
pub const KEY_OWNER: &str = "pemilik";
pub const KEY_AREA: &str = "luas";
pub const KEY_LOCATION: &str = "lokasi";
pub const KEY_CERTIFICATE_NUMBER: &str = "nomor_sertifikat";
pub const KEY_VERIFICATION_STATUS: &str = "status_verifikasi";

// Values stored under KEY_VERIFICATION_STATUS
pub const STATUS_UNVERIFIED: u64 = 0;
pub const STATUS_VERIFIED: u64 = 1;

// Calls executed together in one atomic group
pub const MAX_GROUP_SIZE: usize = 16;
