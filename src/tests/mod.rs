// Test modules for genai-schema crate
//
// Test organization follows the template pattern where each source file
// has a corresponding test file that focuses on behavior verification.

// Test helper utilities (shared schema fixtures)
pub mod helpers;

pub mod input_parsing;
