use studytrack_core::screens::progress_view;

use super::print_json;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    print_json(&progress_view())
}
