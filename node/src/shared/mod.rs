pub mod block_header;
