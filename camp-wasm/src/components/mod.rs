pub(crate) mod post_detail;
