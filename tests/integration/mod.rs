//! End-to-end tests driving the `wpt` binary

mod helpers;

mod test_bump;
mod test_i18n;
mod test_info;
mod test_readme;
