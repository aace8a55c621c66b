mod court;
