pub mod use_block_poller;
