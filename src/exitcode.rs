//! Process exit codes, taken from BSD `sysexits.h`

pub const OK: i32 = 0;

/// Bad arguments, no data file configured, or a data/series file that does not exist
pub const USAGE: i32 = 64;

/// Region or series JSON that cannot be decoded (including unknown level ranks)
pub const DATAERR: i32 = 65;

/// `show` named a region that is not in the assembled world
pub const NOINPUT: i32 = 66;

/// Reading or writing a region file failed after it was resolved
pub const SOFTWARE: i32 = 70;

/// Writing export output to stdout failed
pub const IOERR: i32 = 74;

/// Settings could not be loaded
pub const CONFIG: i32 = 78;
