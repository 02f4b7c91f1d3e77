//! Turn-counter differences (`post - pre`).

use tracing::trace;

use crate::core::GameSnapshot;

pub fn actions_difference(pre: &GameSnapshot, post: &GameSnapshot) -> i64 {
    trace!(pre = pre.num_actions, post = post.num_actions, "actions");
    i64::from(post.num_actions) - i64::from(pre.num_actions)
}

pub fn cards_played_difference(pre: &GameSnapshot, post: &GameSnapshot) -> i64 {
    trace!(pre = pre.played_card_count, post = post.played_card_count, "cards played");
    i64::from(post.played_card_count) - i64::from(pre.played_card_count)
}

pub fn buys_difference(pre: &GameSnapshot, post: &GameSnapshot) -> i64 {
    trace!(pre = pre.num_buys, post = post.num_buys, "buys");
    i64::from(post.num_buys) - i64::from(pre.num_buys)
}

pub fn coins_difference(pre: &GameSnapshot, post: &GameSnapshot) -> i64 {
    trace!(pre = pre.coins, post = post.coins, "coins");
    i64::from(post.coins) - i64::from(pre.coins)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_differences() {
        let mut pre = GameSnapshot::new(2);
        pre.num_actions = 1;
        pre.num_buys = 1;
        pre.coins = 4;
        let mut post = pre.clone();
        post.num_actions = 0;
        post.num_buys = 2;
        post.played_card_count = 1;
        post.coins = 2;

        assert_eq!(actions_difference(&pre, &post), -1);
        assert_eq!(buys_difference(&pre, &post), 1);
        assert_eq!(cards_played_difference(&pre, &post), 1);
        assert_eq!(coins_difference(&pre, &post), -2);
    }
}
