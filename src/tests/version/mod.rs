mod authors;
