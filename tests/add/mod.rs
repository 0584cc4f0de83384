mod add_multiple_files_successfully;
mod removing_files;
