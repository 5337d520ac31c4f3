//! Integration tests driving the built binaries over standard streams.

mod test_assign_unmapped_pos;
mod test_error_paths;
