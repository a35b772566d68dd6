mod exclusions;
mod session_paths;
