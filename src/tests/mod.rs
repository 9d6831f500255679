mod bit_limits;
mod static_list;
