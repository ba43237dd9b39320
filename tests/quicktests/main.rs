mod ordered_tree;
