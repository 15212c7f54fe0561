mod shortened_url;

pub use shortened_url::{
    add_input_handler, edit_input_handler, get_all_handler, get_session_handler,
    redirect_handler, shortcode_from_path, submit_handler,
};
