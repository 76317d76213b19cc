pub mod share_link;
